//! Proxy configuration types

use std::fmt;

use http::HeaderValue;
use url::Url;

use super::NoProxy;
use crate::auth::basic_auth;
use crate::error::{self, Result};

/// Which requests a proxy intercepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intercept {
    All,
    Http,
    Https,
}

/// Proxy endpoint plus routing rules
#[derive(Clone)]
pub struct Proxy {
    intercept: Intercept,
    url: Url,
    authorization: Option<HeaderValue>,
    no_proxy: Option<NoProxy>,
}

impl Proxy {
    /// Proxy **all** traffic to the passed URL.
    ///
    /// ```
    /// use courier_client::proxy::Proxy;
    ///
    /// let proxy = Proxy::all("http://my.prox:8080")?;
    /// assert_eq!(proxy.url().port(), Some(8080));
    /// # Ok::<(), courier_client::Error>(())
    /// ```
    pub fn all(proxy_url: &str) -> Result<Self> {
        Self::parse(Intercept::All, proxy_url)
    }

    /// Proxy plain HTTP traffic only
    pub fn http(proxy_url: &str) -> Result<Self> {
        Self::parse(Intercept::Http, proxy_url)
    }

    /// Proxy HTTPS traffic only
    pub fn https(proxy_url: &str) -> Result<Self> {
        Self::parse(Intercept::Https, proxy_url)
    }

    fn parse(intercept: Intercept, proxy_url: &str) -> Result<Self> {
        let url = Url::parse(proxy_url.trim())?;
        if url.host_str().is_none() {
            return Err(error::invalid_argument(format!(
                "proxy URL has no host: {proxy_url}"
            )));
        }

        // Credentials embedded in the URL become the Proxy-Authorization value
        let authorization = if url.username().is_empty() {
            None
        } else {
            let username = urlencoding::decode(url.username())
                .map_err(error::invalid_argument)?
                .into_owned();
            let password = url
                .password()
                .map(urlencoding::decode)
                .transpose()
                .map_err(error::invalid_argument)?
                .map(|p| p.into_owned());
            Some(basic_auth(&username, password.as_deref())?)
        };

        Ok(Self {
            intercept,
            url,
            authorization,
            no_proxy: None,
        })
    }

    /// Set the `Proxy-Authorization` header using Basic auth.
    pub fn basic_auth(mut self, username: &str, password: &str) -> Result<Self> {
        self.authorization = Some(basic_auth(username, Some(password))?);
        Ok(self)
    }

    /// Hosts that bypass this proxy
    #[must_use]
    pub fn no_proxy(mut self, no_proxy: Option<NoProxy>) -> Self {
        self.no_proxy = no_proxy;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn intercept(&self) -> Intercept {
        self.intercept
    }

    /// Sensitive `Proxy-Authorization` value, if credentials were supplied
    pub fn authorization(&self) -> Option<&HeaderValue> {
        self.authorization.as_ref()
    }

    /// The proxy endpoint to use for `target`, or `None` to connect directly
    pub fn intercepts(&self, target: &Url) -> Option<&Url> {
        let host = target.host_str()?;
        if self.no_proxy.as_ref().is_some_and(|np| np.matches(host)) {
            return None;
        }

        let scheme_matches = match self.intercept {
            Intercept::All => true,
            Intercept::Http => target.scheme() == "http",
            Intercept::Https => target.scheme() == "https",
        };
        scheme_matches.then_some(&self.url)
    }
}

impl fmt::Debug for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut url = self.url.clone();
        let _ = url.set_password(None);
        f.debug_struct("Proxy")
            .field("intercept", &self.intercept)
            .field("url", &url.as_str())
            .field(
                "authorization",
                &self.authorization.as_ref().map(|_| "<redacted>"),
            )
            .field("no_proxy", &self.no_proxy)
            .finish()
    }
}
