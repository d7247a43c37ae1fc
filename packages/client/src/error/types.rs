use std::error::Error as StdError;
use std::fmt;

use http::StatusCode;
use url::Url;

use super::BoxError;

/// A Result alias where the Err case is `courier_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring a client or surfaced by the request policy.
pub struct Error {
    pub(crate) inner: Box<Inner>,
}

pub(crate) struct Inner {
    pub(crate) kind: Kind,
    pub(crate) source: Option<BoxError>,
    pub(crate) url: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// Malformed input handed to a constructor or setter-like operation
    InvalidArgument,
    /// Response body could not be mapped to the expected shape
    Deserialization,
    /// Network or protocol failure reported by the transport
    Transport,
    /// Remote certificate rejected by the configured validator
    CertificateValidation,
    /// Authenticator failed to annotate the outgoing request
    Authentication,
    /// Effective timeout elapsed before the transport answered
    Timeout,
    /// Exchange completed but was classified as an error
    Status(StatusCode),
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                source: None,
                url: None,
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<BoxError>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: Url) -> Self {
        self.inner.url = Some(url);
        self
    }

    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.inner.kind
    }

    /// Get the URL associated with this error, if any
    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        self.inner.url.as_ref()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("courier::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref url) = self.inner.url {
            f.field("url", url);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            Kind::InvalidArgument => f.write_str("invalid argument")?,
            Kind::Deserialization => f.write_str("error deserializing response body")?,
            Kind::Transport => f.write_str("error sending request")?,
            Kind::CertificateValidation => f.write_str("remote certificate rejected")?,
            Kind::Authentication => f.write_str("error authenticating request")?,
            Kind::Timeout => f.write_str("request timeout")?,
            Kind::Status(code) => {
                let prefix = if code.is_client_error() {
                    "HTTP status client error"
                } else if code.is_server_error() {
                    "HTTP status server error"
                } else {
                    "HTTP status error"
                };
                write!(f, "{prefix} ({code})")?;
            }
        }

        if let Some(ref url) = self.inner.url {
            write!(f, " for url ({url})")?;
        }

        if let Some(ref source) = self.inner.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_url_and_source() {
        let url = Url::parse("https://api.example.com/items").expect("test URL should parse");
        let err = Error::new(Kind::Transport)
            .with("connection reset")
            .with_url(url);

        let rendered = err.to_string();
        assert!(rendered.starts_with("error sending request"));
        assert!(rendered.contains("https://api.example.com/items"));
        assert!(rendered.ends_with("connection reset"));
    }

    #[test]
    fn status_display_names_the_class() {
        let err = Error::new(Kind::Status(StatusCode::BAD_GATEWAY));
        assert_eq!(err.to_string(), "HTTP status server error (502 Bad Gateway)");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
