//! Core client configuration types and default implementations
//!
//! - `types`: the `ClientOptions` struct, its constructors and accessors
//! - `defaults`: default values for every field
//! - `builders`: consuming `with_*` methods for fluent construction

pub mod builders;
pub mod defaults;
pub mod types;

pub use types::ClientOptions;
