//! Request execution
//!
//! - `core`: the `RestClient` and its default parameters
//! - `prepare`: URL and header resolution against the options
//! - `redirect`: follow-up attempts for 3xx responses
//! - `execute`: the send, classify, deserialize and surface pipeline

mod core;
mod execute;
mod prepare;
mod redirect;

pub use self::core::RestClient;
