//! URL encoding policy
//!
//! Two pluggable pure functions make user-supplied text URL-safe: one for path
//! segments and generic values, one for query-string values. The caller picks
//! the function that matches where the value lands; nothing here infers it.

pub mod charset;
pub mod encoders;

pub use charset::TextEncoding;
pub use encoders::{
    DefaultQueryEncoder, DefaultValueEncoder, QueryEncoder, ValueEncoder, percent_decode,
};
