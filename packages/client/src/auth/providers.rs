//! Token and API key authenticators

use std::fmt;

use http::{HeaderName, HeaderValue};
use zeroize::Zeroizing;

use super::Authenticator;
use crate::config::ClientOptions;
use crate::error::{self, Result};
use crate::http::PreparedRequest;

/// Bearer token authentication
#[derive(Clone)]
pub struct BearerToken {
    token: Zeroizing<String>,
}

impl BearerToken {
    /// Create new bearer token auth
    #[must_use]
    #[inline]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Zeroizing::new(token.into()),
        }
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

impl Authenticator for BearerToken {
    fn authenticate(&self, _options: &ClientOptions, request: &mut PreparedRequest) -> Result<()> {
        if self.token.is_empty() {
            return Ok(());
        }

        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token.as_str()))
            .map_err(|e| error::authentication(format!("Invalid bearer token: {e}")))?;
        value.set_sensitive(true);
        request.headers.insert(http::header::AUTHORIZATION, value);
        Ok(())
    }

    #[inline]
    fn name(&self) -> &'static str {
        "Bearer"
    }
}

/// Where to place the API key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyPlacement {
    /// Place API key in HTTP header with specified name
    Header(String),
    /// Place API key in URL query parameter with specified name
    Query(String),
}

/// API key authentication (header or query parameter)
#[derive(Clone)]
pub struct ApiKey {
    key: Zeroizing<String>,
    placement: ApiKeyPlacement,
}

impl ApiKey {
    /// Create new API key auth
    #[must_use]
    #[inline]
    pub fn new(key: impl Into<String>, placement: ApiKeyPlacement) -> Self {
        Self {
            key: Zeroizing::new(key.into()),
            placement,
        }
    }

    /// API key sent in an `X-API-Key` header
    #[must_use]
    pub fn header(key: impl Into<String>) -> Self {
        Self::new(key, ApiKeyPlacement::Header("X-API-Key".to_string()))
    }

    /// API key sent as a query parameter
    #[must_use]
    pub fn query(param: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(key, ApiKeyPlacement::Query(param.into()))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("key", &"<redacted>")
            .field("placement", &self.placement)
            .finish()
    }
}

impl Authenticator for ApiKey {
    fn authenticate(&self, options: &ClientOptions, request: &mut PreparedRequest) -> Result<()> {
        if self.key.is_empty() {
            return Ok(());
        }

        match &self.placement {
            ApiKeyPlacement::Header(header_name) => {
                let name = HeaderName::from_bytes(header_name.as_bytes())
                    .map_err(|e| error::authentication(format!("Invalid header name: {e}")))?;
                let mut value = HeaderValue::from_str(&self.key)
                    .map_err(|e| error::authentication(format!("Invalid API key value: {e}")))?;
                value.set_sensitive(true);
                request.headers.insert(name, value);
            }
            ApiKeyPlacement::Query(param_name) => {
                let name = options.encode_query_value(param_name);
                let pair = format!("{name}={}", options.encode_query_value(&self.key));
                // A redirected attempt already carries the key from the previous hop
                let prefix = format!("{name}=");
                let mut pairs: Vec<&str> = request
                    .url
                    .query()
                    .unwrap_or_default()
                    .split('&')
                    .filter(|p| !p.is_empty() && !p.starts_with(&prefix))
                    .collect();
                pairs.push(&pair);
                let query = pairs.join("&");
                request.url.set_query(Some(&query));
            }
        }
        Ok(())
    }

    #[inline]
    fn name(&self) -> &'static str {
        "ApiKey"
    }
}
