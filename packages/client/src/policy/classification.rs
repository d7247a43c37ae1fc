//! Response classification

use std::fmt;

use http::StatusCode;

use crate::http::RawResponse;

/// Client-level status of an exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseStatus {
    /// Not executed yet
    #[default]
    None,
    /// The exchange completed at the protocol level
    Completed,
    /// The exchange failed or was classified as failed
    Error,
    /// The effective timeout elapsed
    TimedOut,
    /// Preparation failed before anything was sent
    Aborted,
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Completed => "completed",
            Self::Error => "error",
            Self::TimedOut => "timed out",
            Self::Aborted => "aborted",
        })
    }
}

/// Maps a completed exchange to `Completed` or `Error`
///
/// Implementations must be total and pure: the same outcome always yields the
/// same status, and nothing is mutated. The pipeline calls the classifier
/// exactly once per exchange, after the transport reports a definitive outcome.
pub trait ResponseClassifier: Send + Sync {
    fn classify(&self, response: &RawResponse) -> ResponseStatus;
}

impl<F> ResponseClassifier for F
where
    F: Fn(&RawResponse) -> ResponseStatus + Send + Sync,
{
    fn classify(&self, response: &RawResponse) -> ResponseStatus {
        self(response)
    }
}

/// 2xx and 404 complete; everything else, including outcomes without a status
/// code, is an error
///
/// A 404 is a well-formed exchange reporting an absent resource, not a failure
/// of the exchange itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClassifier;

impl ResponseClassifier for DefaultClassifier {
    fn classify(&self, response: &RawResponse) -> ResponseStatus {
        match response.status {
            Some(code) if code.is_success() || code == StatusCode::NOT_FOUND => {
                ResponseStatus::Completed
            }
            _ => ResponseStatus::Error,
        }
    }
}
