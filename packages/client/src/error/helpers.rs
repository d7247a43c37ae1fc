use std::fmt;
use std::time::Duration;

/// A marker type to indicate that a request timed out.
#[derive(Debug)]
pub struct TimedOut {
    pub after: Duration,
}

impl fmt::Display for TimedOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timed out after {}ms", self.after.as_millis())
    }
}

impl std::error::Error for TimedOut {}
