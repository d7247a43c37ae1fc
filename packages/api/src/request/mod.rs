//! Request descriptions
//!
//! A [`RestRequest`] says what to call, relative to the client's base URL. It
//! is resolved against the client options only when executed.

mod body;
mod core;

pub use body::{ContentType, RequestBody};
pub use self::core::RestRequest;
