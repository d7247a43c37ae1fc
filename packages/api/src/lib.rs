//! Courier Public API
//!
//! A REST client whose behavior is driven by one shared [`ClientOptions`]
//! value: how URLs are encoded, who authenticates each attempt, when an
//! exchange counts as failed and whether failures come back as `Err` or inside
//! the [`RestResponse`].
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use courier::prelude::*;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct User {
//!     name: String,
//! }
//!
//! # async fn run(transport: Arc<dyn TransportHandler>) -> courier::Result<()> {
//! let options = ClientOptions::from_base_url("https://api.example.com/v1/")?
//!     .with_authenticator(BearerToken::new("token"));
//! let client = RestClient::new(options, transport);
//!
//! let response = client
//!     .execute::<User>(RestRequest::get("users/{id}").with_url_segment("id", "42"))
//!     .await?;
//! if let Some(user) = response.data {
//!     println!("{}", user.name);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod client;
pub mod prelude;
pub mod request;
pub mod response;

pub use client::RestClient;
pub use request::{ContentType, RestRequest};
pub use response::RestResponse;

pub use courier_client::config::ClientOptions;
pub use courier_client::{Error, Result, Url};
pub use courier_client::{auth, cache, config, encoding, error, http, policy, proxy, tls, transport};
