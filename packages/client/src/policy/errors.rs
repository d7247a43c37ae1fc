//! Error surfacing policy
//!
//! Three independent switches. Deserialization failures are governed only by
//! the first two; every other failure category only by `throw_on_any_error`.
//!
//! | throw_on_deserialization_error | fail_on_deserialization_error | on deserialization failure |
//! |---|---|---|
//! | true  | any   | raise a `Deserialization` error |
//! | false | true  | return a response marked `Error` with the error attached |
//! | false | false | return a response still marked `Completed`, raw body only |

/// What to do when a response body cannot be deserialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeserializationAction {
    /// Propagate the error to the caller
    Raise,
    /// Return the response marked failed with the error attached
    MarkFailed,
    /// Return the response as completed with only the raw body populated
    KeepRaw,
}

/// What to do with any other failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureAction {
    Raise,
    Capture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPolicy {
    pub throw_on_deserialization_error: bool,
    pub fail_on_deserialization_error: bool,
    pub throw_on_any_error: bool,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self {
            throw_on_deserialization_error: false,
            fail_on_deserialization_error: true,
            throw_on_any_error: false,
        }
    }
}

impl ErrorPolicy {
    /// Raise every failure to the caller
    #[must_use]
    pub fn strict() -> Self {
        Self {
            throw_on_deserialization_error: true,
            fail_on_deserialization_error: true,
            throw_on_any_error: true,
        }
    }

    /// Never fail a response because its body did not deserialize
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            throw_on_deserialization_error: false,
            fail_on_deserialization_error: false,
            throw_on_any_error: false,
        }
    }

    #[must_use]
    pub fn on_deserialization_failure(&self) -> DeserializationAction {
        if self.throw_on_deserialization_error {
            DeserializationAction::Raise
        } else if self.fail_on_deserialization_error {
            DeserializationAction::MarkFailed
        } else {
            DeserializationAction::KeepRaw
        }
    }

    /// Action for transport, preparation, certificate, timeout and status failures
    #[must_use]
    pub fn on_failure(&self) -> FailureAction {
        if self.throw_on_any_error {
            FailureAction::Raise
        } else {
            FailureAction::Capture
        }
    }
}
