//! Raw outcome of a transport exchange

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use url::Url;

use crate::error::Error;

/// What the transport reported for one attempt
///
/// A captured transport failure is represented as a synthetic outcome with no
/// status code and the failure in `error`, so classification stays total.
#[derive(Debug)]
pub struct RawResponse {
    /// URL the response was received from
    pub url: Url,
    pub status: Option<StatusCode>,
    pub headers: HeaderMap,
    pub body: Bytes,
    pub error: Option<Error>,
}

impl RawResponse {
    #[must_use]
    pub fn new(url: Url, status: StatusCode) -> Self {
        Self {
            url,
            status: Some(status),
            headers: HeaderMap::new(),
            body: Bytes::new(),
            error: None,
        }
    }

    /// Outcome standing in for an exchange that never produced a response
    #[must_use]
    pub fn synthetic(url: Url, error: Error) -> Self {
        Self {
            url,
            status: None,
            headers: HeaderMap::new(),
            body: Bytes::new(),
            error: Some(error),
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.status.is_none()
    }

    /// Status is 2xx
    #[must_use]
    pub fn is_success_status(&self) -> bool {
        self.status.is_some_and(|s| s.is_success())
    }

    /// Header value as UTF-8, if present and valid
    #[must_use]
    pub fn header_str(&self, name: impl http::header::AsHeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
