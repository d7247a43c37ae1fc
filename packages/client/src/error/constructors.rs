use std::time::Duration;

use http::StatusCode;
use url::Url;

use super::BoxError;
use super::helpers::TimedOut;
use super::types::{Error, Kind};

/// Creates an `Error` for a malformed argument.
pub fn invalid_argument<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::InvalidArgument).with(e.into())
}

/// Creates an `Error` for a body that could not be deserialized.
pub fn deserialization<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Deserialization).with(e.into())
}

/// Creates an `Error` for a transport failure.
pub fn transport<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Transport).with(e.into())
}

/// Creates an `Error` for a rejected remote certificate.
pub fn certificate_validation<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::CertificateValidation).with(e.into())
}

/// Creates an `Error` for a failing authenticator.
pub fn authentication<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Authentication).with(e.into())
}

/// Creates an `Error` for an elapsed effective timeout.
pub fn timeout(after: Duration) -> Error {
    Error::new(Kind::Timeout).with(TimedOut { after })
}

/// Creates an `Error` for an exchange classified as failed.
pub fn status(code: StatusCode, url: Url) -> Error {
    Error::new(Kind::Status(code)).with_url(url)
}
