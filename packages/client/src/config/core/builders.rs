//! Builder methods for client configuration
//!
//! Consuming `with_*` methods so a configuration can be assembled in one
//! expression before it is handed to a client.

use std::sync::Arc;
use std::time::Duration;

use super::super::security::Credentials;
use super::types::ClientOptions;
use crate::auth::Authenticator;
use crate::cache::CacheControl;
use crate::encoding::{QueryEncoder, TextEncoding, ValueEncoder};
use crate::http::DecompressionMethods;
use crate::policy::{ErrorPolicy, ResponseClassifier};
use crate::proxy::Proxy;
use crate::tls::{Certificate, CertificateValidator};
use crate::transport::HandlerDecorator;

impl ClientOptions {
    /// Override the `Host` header
    ///
    /// # Examples
    /// ```
    /// use courier_client::config::ClientOptions;
    ///
    /// let options = ClientOptions::from_base_url("http://10.0.0.7:8080")
    ///     .unwrap()
    ///     .with_base_host("api.internal");
    /// assert_eq!(options.base_host(), Some("api.internal"));
    /// ```
    #[must_use]
    pub fn with_base_host(mut self, host: impl Into<String>) -> Self {
        self.base_host = Some(host.into());
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Install an authenticator
    #[must_use]
    pub fn with_authenticator(self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator.replace(authenticator);
        self
    }

    #[must_use]
    pub fn with_handler_decorator(mut self, decorator: impl HandlerDecorator + 'static) -> Self {
        self.handler_decorator = Some(Arc::new(decorator));
        self
    }

    #[must_use]
    pub fn with_client_certificate(mut self, certificate: Certificate) -> Self {
        self.client_certificates.push(certificate);
        self
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub fn with_default_credentials(mut self, enabled: bool) -> Self {
        self.use_default_credentials = enabled;
        self
    }

    #[must_use]
    pub fn with_pre_authenticate(mut self, enabled: bool) -> Self {
        self.pre_authenticate = enabled;
        self
    }

    #[must_use]
    pub fn with_certificate_validator(
        mut self,
        validator: impl CertificateValidator + 'static,
    ) -> Self {
        self.certificate_validator = Some(Arc::new(validator));
        self
    }

    #[must_use]
    pub fn with_proxy(mut self, proxy: Proxy) -> Self {
        self.proxy = Some(proxy);
        self
    }

    #[must_use]
    pub fn with_cache_policy(mut self, cache_policy: CacheControl) -> Self {
        self.cache_policy = Some(cache_policy);
        self
    }

    #[must_use]
    pub fn with_follow_redirects(mut self, enabled: bool) -> Self {
        self.follow_redirects = enabled;
        self
    }

    #[must_use]
    pub fn with_max_redirects(mut self, max_redirects: u32) -> Self {
        self.max_redirects = Some(max_redirects);
        self
    }

    /// Set the client-level timeout cap
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use courier_client::config::ClientOptions;
    ///
    /// let options = ClientOptions::new().with_max_timeout(Duration::from_secs(5));
    /// assert_eq!(
    ///     options.effective_timeout(Some(Duration::from_secs(2))),
    ///     Some(Duration::from_secs(2))
    /// );
    /// ```
    #[must_use]
    pub fn with_max_timeout(mut self, timeout: Duration) -> Self {
        self.set_max_timeout(Some(timeout));
        self
    }

    #[must_use]
    pub fn with_automatic_decompression(mut self, methods: DecompressionMethods) -> Self {
        self.automatic_decompression = methods;
        self
    }

    #[must_use]
    pub fn with_expect_continue(mut self, expect: bool) -> Self {
        self.expect_continue = Some(expect);
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_disable_charset(mut self, disabled: bool) -> Self {
        self.disable_charset = disabled;
        self
    }

    #[must_use]
    pub fn with_value_encoder(mut self, encoder: impl ValueEncoder + 'static) -> Self {
        self.set_value_encoder(encoder);
        self
    }

    #[must_use]
    pub fn with_query_encoder(mut self, encoder: impl QueryEncoder + 'static) -> Self {
        self.set_query_encoder(encoder);
        self
    }

    #[must_use]
    pub fn with_duplicate_default_parameter_names(mut self, allowed: bool) -> Self {
        self.allow_duplicate_default_parameter_names = allowed;
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: impl ResponseClassifier + 'static) -> Self {
        self.set_classifier(classifier);
        self
    }

    #[must_use]
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    #[must_use]
    pub fn with_throw_on_deserialization_error(mut self, enabled: bool) -> Self {
        self.error_policy.throw_on_deserialization_error = enabled;
        self
    }

    #[must_use]
    pub fn with_fail_on_deserialization_error(mut self, enabled: bool) -> Self {
        self.error_policy.fail_on_deserialization_error = enabled;
        self
    }

    #[must_use]
    pub fn with_throw_on_any_error(mut self, enabled: bool) -> Self {
        self.error_policy.throw_on_any_error = enabled;
        self
    }
}
