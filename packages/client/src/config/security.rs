//! Security-related configuration
//!
//! Credentials for challenge-based schemes and the certificate acceptance hook
//! transports call during the handshake.

use std::fmt;

use zeroize::Zeroizing;

use super::core::ClientOptions;
use crate::error::Result;
use crate::tls::{Certificate, CertificateChain, CertificateValidator, PolicyErrors, TlsError};

/// Opaque credentials handed to the transport
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: Zeroizing<String>,
    domain: Option<String>,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
            domain: None,
        }
    }

    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("domain", &self.domain)
            .finish()
    }
}

impl ClientOptions {
    /// Decide whether a remote certificate is acceptable for this client
    ///
    /// With a validator configured, its verdict is final. Without one, the
    /// certificate is accepted only when the transport reported no policy errors.
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

pub(crate) fn check_remote_certificate(
    validator: Option<&dyn CertificateValidator>,
    certificate: &Certificate,
    chain: &CertificateChain,
    errors: PolicyErrors,
) -> Result<()> {
    let accepted = match validator {
        Some(validator) => validator.validate(certificate, chain, errors),
        None => errors.is_empty(),
    };

    if accepted {
        Ok(())
    } else {
        tracing::debug!(?errors, "remote certificate rejected");
        Err(TlsError::CertificateRejected(format!("{errors:?}")).into())
    }
}
