//! Proxy bypass list

use std::net::IpAddr;

/// Comma separated hosts that bypass the proxy
///
/// Entries match the host exactly or any of its subdomains, so `example.com`
/// and `.example.com` are equivalent. `*` matches everything. IP literals
/// match exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoProxy {
    entries: Vec<String>,
}

impl NoProxy {
    /// Read `NO_PROXY`, falling back to `no_proxy`
    pub fn from_env() -> Option<Self> {
        let raw = std::env::var("NO_PROXY")
            .or_else(|_| std::env::var("no_proxy"))
            .unwrap_or_default();
        Self::from_string(&raw)
    }

    /// `None` when the list holds no entries
    pub fn from_string(list: &str) -> Option<Self> {
        let entries: Vec<String> = list
            .split(',')
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    pub fn matches(&self, host: &str) -> bool {
        let host = host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .to_ascii_lowercase();
        let host_ip = host.parse::<IpAddr>().ok();

        self.entries.iter().any(|entry| {
            if entry == "*" {
                return true;
            }
            match (host_ip, entry.parse::<IpAddr>().ok()) {
                (Some(h), Some(e)) => h == e,
                (None, None) => {
                    host == *entry
                        || host
                            .strip_suffix(entry.as_str())
                            .is_some_and(|prefix| prefix.ends_with('.'))
                }
                _ => false,
            }
        })
    }
}
