//! # Courier Client Core
//!
//! Configuration and policy model for a REST client. Everything a request
//! consults before and after the wire lives here; the wire itself is a
//! [`transport::TransportHandler`] supplied by the caller.
//!
//! ## Features
//!
//! - **Client options** with consuming `with_*` builders and validation
//! - **Response classification** through a pluggable classifier
//! - **Error surfacing policy** for deserialization and transport failures
//! - **Encoding policy** for path segments and query values
//! - **Authenticator slot** swappable between requests without locking
//! - **TLS material** with a certificate acceptance hook
//!
//! ## Usage
//!
//! ```rust
//! use courier_client::prelude::*;
//!
//! let options = ClientOptions::from_base_url("https://api.example.com/v1/")?
//!     .with_throw_on_any_error(true)
//!     .with_authenticator(BearerToken::new("token"));
//!
//! assert!(options.authenticator.is_set());
//! assert!(options.error_policy.throw_on_any_error);
//! # Ok::<(), courier_client::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod auth;
pub mod cache;
pub mod config;
pub mod encoding;
pub mod error;
pub mod http;
pub mod policy;
pub mod prelude;
pub mod proxy;
pub mod tls;
pub mod transport;

pub use error::{Error, Result};
pub use url::Url;
