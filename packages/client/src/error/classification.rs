use http::StatusCode;

use super::helpers::TimedOut;
use super::types::{Error, Kind};

impl Error {
    /// Returns true if the error was caused by malformed input.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.inner.kind, Kind::InvalidArgument)
    }

    /// Returns true if the error comes from deserializing a response body.
    #[must_use]
    pub fn is_deserialization(&self) -> bool {
        matches!(self.inner.kind, Kind::Deserialization)
    }

    /// Returns true if the error was reported by the transport.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self.inner.kind, Kind::Transport)
    }

    /// Returns true if a remote certificate was rejected.
    #[must_use]
    pub fn is_certificate_validation(&self) -> bool {
        matches!(self.inner.kind, Kind::CertificateValidation)
    }

    /// Returns true if the authenticator failed.
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self.inner.kind, Kind::Authentication)
    }

    /// Returns true if the error is related to a timeout.
    ///
    /// Transports may report their own timeouts as `Transport` errors with a
    /// `TimedOut` or `io::ErrorKind::TimedOut` somewhere in the source chain.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        if matches!(self.inner.kind, Kind::Timeout) {
            return true;
        }

        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            if err.is::<TimedOut>() {
                return true;
            }
            if let Some(io) = err.downcast_ref::<std::io::Error>() {
                if io.kind() == std::io::ErrorKind::TimedOut {
                    return true;
                }
            }
            source = err.source();
        }

        false
    }

    /// Returns true if the error was produced from a classified response.
    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self.inner.kind, Kind::Status(_))
    }

    /// Returns the status code, if the error was generated from a response.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self.inner.kind {
            Kind::Status(code) => Some(code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error;

    #[test]
    fn timeout_detected_through_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
        assert!(error::transport(io).is_timeout());
        assert!(error::timeout(Duration::from_millis(5)).is_timeout());
        assert!(!error::transport("refused").is_timeout());
    }

    #[test]
    fn status_is_exposed_only_for_status_errors() {
        let url = url::Url::parse("http://localhost/").expect("test URL should parse");
        let err = error::status(StatusCode::CONFLICT, url);
        assert!(err.is_status());
        assert_eq!(err.status(), Some(StatusCode::CONFLICT));
        assert_eq!(error::deserialization("eof").status(), None);
    }
}
