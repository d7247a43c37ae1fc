//! Courier client prelude
//!
//! The types most callers touch when configuring a client.

pub use crate::auth::{ApiKey, Authenticator, AuthenticatorSlot, BasicAuth, BearerToken};
pub use crate::cache::CacheControl;
pub use crate::config::{ClientOptions, Credentials};
pub use crate::encoding::{QueryEncoder, TextEncoding, ValueEncoder};
pub use crate::error::{Error, Kind, Result};
pub use crate::http::{DecompressionMethods, PreparedRequest, RawResponse};
pub use crate::policy::{ErrorPolicy, ResponseClassifier, ResponseStatus};
pub use crate::proxy::{NoProxy, Proxy};
pub use crate::tls::{Certificate, CertificateChain, CertificateValidator, PolicyErrors};
pub use crate::transport::{HandlerDecorator, TransportHandler, TransportSettings};

pub use ::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
pub use url::Url;
