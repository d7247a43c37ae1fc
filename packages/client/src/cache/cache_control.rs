//! `Cache-Control` request directives

use std::fmt::Write as _;
use std::time::Duration;

use http::HeaderValue;

/// Request cache directives sent with every request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheControl {
    pub no_cache: bool,
    pub no_store: bool,
    pub no_transform: bool,
    pub only_if_cached: bool,
    pub max_age: Option<Duration>,
    /// `Some(None)` sends a bare `max-stale`, accepting any staleness
    pub max_stale: Option<Option<Duration>>,
    pub min_fresh: Option<Duration>,
}

impl CacheControl {
    /// Always revalidate with the origin
    #[must_use]
    pub fn no_cache() -> Self {
        Self {
            no_cache: true,
            ..Self::default()
        }
    }

    /// Bypass every cache
    #[must_use]
    pub fn no_store() -> Self {
        Self {
            no_cache: true,
            no_store: true,
            ..Self::default()
        }
    }

    /// Accept cached responses no older than `max_age`
    #[must_use]
    pub fn max_age(max_age: Duration) -> Self {
        Self {
            max_age: Some(max_age),
            ..Self::default()
        }
    }

    /// Serve only from cache
    #[must_use]
    pub fn only_if_cached() -> Self {
        Self {
            only_if_cached: true,
            ..Self::default()
        }
    }

    /// Render the directive list, `None` when no directive is set
    #[must_use]
    pub fn to_header_value(&self) -> Option<HeaderValue> {
        let mut directives: Vec<String> = Vec::new();

        if self.no_cache {
            directives.push("no-cache".to_string());
        }
        if self.no_store {
            directives.push("no-store".to_string());
        }
        if let Some(max_age) = self.max_age {
            directives.push(format!("max-age={}", max_age.as_secs()));
        }
        match self.max_stale {
            Some(Some(limit)) => directives.push(format!("max-stale={}", limit.as_secs())),
            Some(None) => directives.push("max-stale".to_string()),
            None => {}
        }
        if let Some(min_fresh) = self.min_fresh {
            directives.push(format!("min-fresh={}", min_fresh.as_secs()));
        }
        if self.no_transform {
            directives.push("no-transform".to_string());
        }
        if self.only_if_cached {
            directives.push("only-if-cached".to_string());
        }

        if directives.is_empty() {
            return None;
        }

        let mut rendered = String::new();
        for (i, directive) in directives.iter().enumerate() {
            if i > 0 {
                rendered.push_str(", ");
            }
            let _ = write!(rendered, "{directive}");
        }
        HeaderValue::from_str(&rendered).ok()
    }
}
