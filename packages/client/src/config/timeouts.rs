//! Timeout resolution
//!
//! The client-level cap and a request-level timeout combine into the timeout
//! handed to the transport. Enforcement is the transport's business.

use std::time::Duration;

use super::core::ClientOptions;

impl ClientOptions {
    /// The timeout to apply to a request: the smaller of the client cap and the
    /// request timeout when both are set, otherwise whichever one is set.
    #[must_use]
    pub fn effective_timeout(&self, request_timeout: Option<Duration>) -> Option<Duration> {
        match (self.max_timeout, request_timeout) {
            (Some(client), Some(request)) => Some(client.min(request)),
            (client, request) => client.or(request),
        }
    }

    /// Set the client cap; `None` or a zero duration removes it
    pub fn set_max_timeout(&mut self, timeout: Option<Duration>) {
        self.max_timeout = timeout.filter(|t| !t.is_zero());
    }

    /// Set the client cap in milliseconds, where 0 means no cap
    pub fn set_max_timeout_millis(&mut self, millis: u64) {
        self.set_max_timeout(Some(Duration::from_millis(millis)));
    }

    /// The client cap in milliseconds, 0 when there is none
    #[must_use]
    pub fn max_timeout_millis(&self) -> u64 {
        self.max_timeout
            .map_or(0, |t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn request_timeout_below_cap_wins() {
        let mut options = ClientOptions::new();
        options.set_max_timeout_millis(5000);
        assert_eq!(options.effective_timeout(Some(ms(2000))), Some(ms(2000)));
    }

    #[test]
    fn cap_applies_without_request_timeout() {
        let mut options = ClientOptions::new();
        options.set_max_timeout_millis(5000);
        assert_eq!(options.effective_timeout(None), Some(ms(5000)));
    }

    #[test]
    fn cap_bounds_a_longer_request_timeout() {
        let mut options = ClientOptions::new();
        options.set_max_timeout_millis(5000);
        assert_eq!(options.effective_timeout(Some(ms(9000))), Some(ms(5000)));
    }

    #[test]
    fn zero_millis_means_no_cap() {
        let mut options = ClientOptions::new();
        options.set_max_timeout_millis(0);
        assert_eq!(options.max_timeout, None);
        assert_eq!(options.max_timeout_millis(), 0);
        assert_eq!(options.effective_timeout(Some(ms(750))), Some(ms(750)));
        assert_eq!(options.effective_timeout(None), None);
    }
}
