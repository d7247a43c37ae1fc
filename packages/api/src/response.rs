//! Result of an executed request

use bytes::Bytes;
use courier_client::error::Error;
use courier_client::http::RawResponse;
use courier_client::policy::ResponseStatus;
use http::{HeaderMap, StatusCode};
use url::Url;

/// What `RestClient::execute` hands back when a failure is captured rather
/// than raised
///
/// `error` holds the captured failure, if any. `data` is only populated when
/// the exchange completed and the body deserialized.
#[derive(Debug)]
pub struct RestResponse<T> {
    pub status: ResponseStatus,
    pub status_code: Option<StatusCode>,
    pub headers: HeaderMap,
    pub raw_body: Bytes,
    pub data: Option<T>,
    pub error: Option<Error>,
    /// URL of the final attempt, `None` when the request never got that far
    pub url: Option<Url>,
}

impl<T> RestResponse<T> {
    pub(crate) fn from_raw(raw: RawResponse, status: ResponseStatus) -> Self {
        Self {
            status,
            status_code: raw.status,
            headers: raw.headers,
            raw_body: raw.body,
            data: None,
            error: raw.error,
            url: Some(raw.url),
        }
    }

    /// Outcome for a request that never produced a response
    pub(crate) fn failed(status: ResponseStatus, url: Option<Url>, error: Error) -> Self {
        Self {
            status,
            status_code: None,
            headers: HeaderMap::new(),
            raw_body: Bytes::new(),
            data: None,
            error: Some(error),
            url,
        }
    }

    /// 2xx status and classified `Completed`
    pub fn is_successful(&self) -> bool {
        self.status == ResponseStatus::Completed
            && self.status_code.is_some_and(|code| code.is_success())
    }

    /// Body as text, lossy on invalid UTF-8
    pub fn content(&self) -> String {
        String::from_utf8_lossy(&self.raw_body).into_owned()
    }

    pub fn header_str(&self, name: impl http::header::AsHeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Convert into the deserialized value or the captured failure
    ///
    /// # Errors
    ///
    /// Returns the captured error, or a `Deserialization` error when the
    /// exchange completed without data.
    pub fn into_result(self) -> Result<T, Error> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.data.ok_or_else(|| {
            courier_client::error::deserialization("response carried no data")
        })
    }
}
