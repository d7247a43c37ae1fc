//! Client configuration
//!
//! `ClientOptions` is the per-client bundle of settings and policies consulted
//! at construction, before each send and after each exchange. It is shared by
//! reference across concurrent requests; only the authenticator slot is meant to
//! change after construction.

pub mod core;
pub mod security;
pub mod timeouts;
pub mod validation;

pub use self::core::ClientOptions;
pub use security::Credentials;
pub use validation::{ConfigDefaults, ConfigValidator, ConfigurationError};
