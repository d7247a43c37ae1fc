//! Authentication strategies
//!
//! A client holds at most one [`Authenticator`] in an [`AuthenticatorSlot`]. The
//! slot is read once per outgoing attempt and can be swapped between requests
//! without locking.

pub mod authenticator;
pub mod basic_auth;
pub mod providers;

pub use authenticator::{Authenticator, AuthenticatorSlot, SharedAuthenticator};
pub use basic_auth::{BasicAuth, basic_auth};
pub use providers::{ApiKey, ApiKeyPlacement, BearerToken};
