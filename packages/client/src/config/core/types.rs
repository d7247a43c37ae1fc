//! Client configuration structure and field definitions

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use super::super::security::Credentials;
use super::super::validation::ConfigurationError;
use crate::auth::AuthenticatorSlot;
use crate::cache::CacheControl;
use crate::encoding::{QueryEncoder, TextEncoding, ValueEncoder};
use crate::error::{self, Result};
use crate::http::{DecompressionMethods, RawResponse};
use crate::policy::{ErrorPolicy, ResponseClassifier, ResponseStatus};
use crate::proxy::Proxy;
use crate::tls::{Certificate, CertificateValidator};
use crate::transport::HandlerDecorator;

/// Client-wide configuration and request policy
///
/// Plain settings are public fields. Strategy objects are stored as shared
/// trait objects so that test doubles and closures can be dropped in. The
/// authenticator lives in an [`AuthenticatorSlot`] and can be swapped through a
/// shared reference while requests are in flight.
#[derive(Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct ClientOptions {
    // ===== Identity =====
    /// Base URL that request resources are resolved against
    pub base_url: Option<Url>,

    /// Overrides the `Host` header independent of the base URL authority
    pub base_host: Option<String>,

    /// Value of the `User-Agent` header
    pub user_agent: String,

    // ===== Extensibility =====
    /// Strategy that adds credentials to each outgoing attempt
    pub authenticator: AuthenticatorSlot,

    /// Wraps the transport handler once, when the client is built
    pub handler_decorator: Option<Arc<dyn HandlerDecorator>>,

    // ===== Security =====
    /// Client certificates offered during the TLS handshake
    pub client_certificates: Vec<Certificate>,

    /// Credentials handed to the transport for challenge-based schemes
    pub credentials: Option<Credentials>,

    /// Let the transport use the ambient credentials of the process
    pub use_default_credentials: bool,

    /// Send credentials with the first request instead of waiting for a challenge
    pub pre_authenticate: bool,

    /// Sole authority on remote certificate acceptance when set
    pub certificate_validator: Option<Arc<dyn CertificateValidator>>,

    // ===== Transport behavior =====
    pub proxy: Option<Proxy>,

    /// Cache directives sent with every request
    pub cache_policy: Option<CacheControl>,

    pub follow_redirects: bool,

    /// `Some(0)` permits redirects in principle but follows none
    pub max_redirects: Option<u32>,

    /// Client-level timeout cap, `None` for no cap
    pub max_timeout: Option<Duration>,

    /// Encodings advertised in `Accept-Encoding` and decoded by the transport
    pub automatic_decompression: DecompressionMethods,

    /// `Expect: 100-continue` behavior, `None` leaves it to the transport
    pub expect_continue: Option<bool>,

    // ===== Encoding =====
    pub encoding: TextEncoding,

    /// Omit the `charset` parameter from request content types
    pub disable_charset: bool,

    pub value_encoder: Arc<dyn ValueEncoder>,

    pub query_encoder: Arc<dyn QueryEncoder>,

    pub allow_duplicate_default_parameter_names: bool,

    // ===== Policy =====
    pub classifier: Arc<dyn ResponseClassifier>,

    pub error_policy: ErrorPolicy,
}

impl ClientOptions {
    /// Configuration without a base URL
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration seeded from an already parsed base URL
    #[must_use]
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url: Some(base_url),
            ..Self::default()
        }
    }

    /// Configuration seeded from a base URL string
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if the string is empty, cannot be
    /// parsed, or names no host.
    pub fn from_base_url(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(error::invalid_argument(ConfigurationError::EmptyBaseUrl));
        }

        let parsed = Url::parse(trimmed).map_err(|e| {
            error::invalid_argument(ConfigurationError::InvalidBaseUrl(format!(
                "{trimmed}: {e}"
            )))
        })?;

        if !parsed.has_host() {
            return Err(error::invalid_argument(ConfigurationError::InvalidBaseUrl(
                format!("{trimmed}: URL has no host"),
            )));
        }

        Ok(Self::with_base_url(parsed))
    }

    /// Run the configured classifier over a completed exchange
    #[inline]
    #[must_use]
    pub fn classify(&self, response: &RawResponse) -> ResponseStatus {
        self.classifier.classify(response)
    }

    /// Encode a value for a path segment or other generic URL position
    #[inline]
    #[must_use]
    pub fn encode_value(&self, value: &str) -> String {
        self.value_encoder.encode_value(value)
    }

    /// Encode a query-string value in the configured character encoding
    #[inline]
    #[must_use]
    pub fn encode_query_value(&self, value: &str) -> String {
        self.query_encoder.encode_query_value(value, self.encoding)
    }

    /// Charset parameter appended to request content types
    #[must_use]
    pub fn charset(&self) -> Option<&'static str> {
        if self.disable_charset {
            None
        } else {
            Some(self.encoding.name())
        }
    }

    // Accessors for the fields whose storage differs from their public shape.

    #[must_use]
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn set_base_url(&mut self, base_url: Option<Url>) {
        self.base_url = base_url;
    }

    #[must_use]
    pub fn base_host(&self) -> Option<&str> {
        self.base_host.as_deref()
    }

    pub fn set_base_host(&mut self, base_host: Option<String>) {
        self.base_host = base_host;
    }

    /// Replace the value encoder
    ///
    /// Meant to be called while the options are still exclusively owned. Once
    /// shared with a client, reassigning requires `&mut` access, which keeps
    /// in-flight readers from observing the change.
    pub fn set_value_encoder(&mut self, encoder: impl ValueEncoder + 'static) {
        self.value_encoder = Arc::new(encoder);
    }

    /// Replace the query encoder, with the same caveat as `set_value_encoder`
    pub fn set_query_encoder(&mut self, encoder: impl QueryEncoder + 'static) {
        self.query_encoder = Arc::new(encoder);
    }

    pub fn set_classifier(&mut self, classifier: impl ResponseClassifier + 'static) {
        self.classifier = Arc::new(classifier);
    }

    pub fn set_certificate_validator(
        &mut self,
        validator: Option<Arc<dyn CertificateValidator>>,
    ) {
        self.certificate_validator = validator;
    }

    pub fn set_handler_decorator(&mut self, decorator: Option<Arc<dyn HandlerDecorator>>) {
        self.handler_decorator = decorator;
    }
}

impl FromStr for ClientOptions {
    type Err = crate::error::Error;

    fn from_str(base_url: &str) -> Result<Self> {
        Self::from_base_url(base_url)
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .field("base_host", &self.base_host)
            .field("user_agent", &self.user_agent)
            .field("authenticator", &self.authenticator)
            .field("handler_decorator", &self.handler_decorator.is_some())
            .field("client_certificates", &self.client_certificates.len())
            .field("credentials", &self.credentials)
            .field("use_default_credentials", &self.use_default_credentials)
            .field("pre_authenticate", &self.pre_authenticate)
            .field("certificate_validator", &self.certificate_validator.is_some())
            .field("proxy", &self.proxy)
            .field("cache_policy", &self.cache_policy)
            .field("follow_redirects", &self.follow_redirects)
            .field("max_redirects", &self.max_redirects)
            .field("max_timeout", &self.max_timeout)
            .field("automatic_decompression", &self.automatic_decompression)
            .field("expect_continue", &self.expect_continue)
            .field("encoding", &self.encoding)
            .field("disable_charset", &self.disable_charset)
            .field(
                "allow_duplicate_default_parameter_names",
                &self.allow_duplicate_default_parameter_names,
            )
            .field("error_policy", &self.error_policy)
            .finish_non_exhaustive()
    }
}
