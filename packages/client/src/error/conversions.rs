use http::header::{InvalidHeaderName, InvalidHeaderValue};

use super::types::{Error, Kind};

impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Self {
        Error::new(Kind::InvalidArgument).with(error)
    }
}

impl From<InvalidHeaderName> for Error {
    fn from(error: InvalidHeaderName) -> Self {
        Error::new(Kind::InvalidArgument).with(error)
    }
}

impl From<InvalidHeaderValue> for Error {
    fn from(error: InvalidHeaderValue) -> Self {
        Error::new(Kind::InvalidArgument).with(error)
    }
}

impl From<crate::config::ConfigurationError> for Error {
    fn from(error: crate::config::ConfigurationError) -> Self {
        Error::new(Kind::InvalidArgument).with(error)
    }
}

impl From<crate::tls::TlsError> for Error {
    fn from(error: crate::tls::TlsError) -> Self {
        match error {
            crate::tls::TlsError::CertificateRejected(_) => {
                Error::new(Kind::CertificateValidation).with(error)
            }
            crate::tls::TlsError::CertificateParsing(_) => {
                Error::new(Kind::InvalidArgument).with(error)
            }
        }
    }
}
