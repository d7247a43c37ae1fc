//! Request cache policy
//!
//! The client does not cache anything itself. It sends the configured
//! directives with every request and leaves enforcement to the transport or
//! any intermediary.

pub mod cache_control;

pub use cache_control::CacheControl;
