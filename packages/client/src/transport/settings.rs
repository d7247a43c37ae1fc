use std::fmt;
use std::sync::Arc;

use http::HeaderValue;
use url::Url;

use crate::cache::CacheControl;
use crate::config::security::check_remote_certificate;
use crate::config::{ClientOptions, Credentials};
use crate::error::Result;
use crate::http::DecompressionMethods;
use crate::proxy::Proxy;
use crate::tls::{Certificate, CertificateChain, CertificateValidator, PolicyErrors};

/// Read-only view of the settings a transport needs
///
/// Taken once when the client is built. Later changes to the options a caller
/// still holds do not reach an existing client.
#[derive(Clone, Default)]
pub struct TransportSettings {
    pub proxy: Option<Proxy>,
    pub client_certificates: Vec<Certificate>,
    pub credentials: Option<Credentials>,
    pub use_default_credentials: bool,
    pub pre_authenticate: bool,
    pub automatic_decompression: DecompressionMethods,
    pub expect_continue: Option<bool>,
    pub cache_policy: Option<CacheControl>,
    certificate_validator: Option<Arc<dyn CertificateValidator>>,
}

impl TransportSettings {
    #[must_use]
    pub fn from_options(options: &ClientOptions) -> Self {
        Self {
            proxy: options.proxy.clone(),
            client_certificates: options.client_certificates.clone(),
            credentials: options.credentials.clone(),
            use_default_credentials: options.use_default_credentials,
            pre_authenticate: options.pre_authenticate,
            automatic_decompression: options.automatic_decompression,
            expect_continue: options.expect_continue,
            cache_policy: options.cache_policy.clone(),
            certificate_validator: options.certificate_validator.clone(),
        }
    }

    /// Proxy endpoint for `target`, honouring the bypass list
    pub fn proxy_for(&self, target: &Url) -> Option<(&Url, Option<&HeaderValue>)> {
        let proxy = self.proxy.as_ref()?;
        proxy
            .intercepts(target)
            .map(|endpoint| (endpoint, proxy.authorization()))
    }

    /// Handshake hook, same verdict as
    /// [`ClientOptions::validate_remote_certificate`].
    ///
    /// # Errors
    ///
    /// Returns a `CertificateValidation` error when the certificate is rejected.
    pub fn validate_remote_certificate(
        &self,
        certificate: &Certificate,
        chain: &CertificateChain,
        errors: PolicyErrors,
    ) -> Result<()> {
        check_remote_certificate(
            self.certificate_validator.as_deref(),
            certificate,
            chain,
            errors,
        )
    }
}

impl From<&ClientOptions> for TransportSettings {
    fn from(options: &ClientOptions) -> Self {
        Self::from_options(options)
    }
}

impl fmt::Debug for TransportSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportSettings")
            .field("proxy", &self.proxy)
            .field("client_certificates", &self.client_certificates.len())
            .field("credentials", &self.credentials)
            .field("use_default_credentials", &self.use_default_credentials)
            .field("pre_authenticate", &self.pre_authenticate)
            .field("automatic_decompression", &self.automatic_decompression)
            .field("expect_continue", &self.expect_continue)
            .field("cache_policy", &self.cache_policy)
            .field("certificate_validator", &self.certificate_validator.is_some())
            .finish()
    }
}
