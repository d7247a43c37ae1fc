//! Request policy consulted after each exchange
//!
//! - `classification`: turns a raw outcome into a client-level status
//! - `errors`: decides whether a failure is raised or captured

pub mod classification;
pub mod errors;

pub use classification::{DefaultClassifier, ResponseClassifier, ResponseStatus};
pub use errors::{DeserializationAction, ErrorPolicy, FailureAction};
