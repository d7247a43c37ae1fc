//! DER-encoded certificate containers

use std::fmt;

use super::errors::TlsError;

const PEM_CERTIFICATE_TAG: &str = "CERTIFICATE";

/// A single X.509 certificate in DER form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Certificate {
    der: Vec<u8>,
}

impl Certificate {
    /// Wrap DER bytes without inspecting them.
    #[must_use]
    pub fn from_der(der: impl Into<Vec<u8>>) -> Self {
        Self { der: der.into() }
    }

    /// Parse the first `CERTIFICATE` block of a PEM document.
    ///
    /// # Errors
    ///
    /// Returns `TlsError::CertificateParsing` if the input is not PEM or holds
    /// no certificate block.
    pub fn from_pem(pem: &[u8]) -> Result<Self, TlsError> {
        Self::from_pem_bundle(pem)?
            .into_iter()
            .next()
            .ok_or_else(|| TlsError::CertificateParsing("no CERTIFICATE block found".to_string()))
    }

    /// Parse every `CERTIFICATE` block of a PEM bundle, skipping other blocks
    /// such as private keys.
    ///
    /// # Errors
    ///
    /// Returns `TlsError::CertificateParsing` if the input is not valid PEM.
    pub fn from_pem_bundle(pem: &[u8]) -> Result<Vec<Self>, TlsError> {
        let blocks =
            pem::parse_many(pem).map_err(|e| TlsError::CertificateParsing(e.to_string()))?;

        Ok(blocks
            .into_iter()
            .filter(|block| block.tag() == PEM_CERTIFICATE_TAG)
            .map(|block| Self::from_der(block.into_contents()))
            .collect())
    }

    #[must_use]
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }

    /// Re-encode as a PEM `CERTIFICATE` block.
    #[must_use]
    pub fn to_pem(&self) -> String {
        pem::encode(&pem::Pem::new(PEM_CERTIFICATE_TAG, self.der.clone()))
    }
}

impl fmt::Debug for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Certificate")
            .field("der_len", &self.der.len())
            .finish()
    }
}

/// The chain presented by a remote peer, leaf first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateChain {
    certificates: Vec<Certificate>,
}

impl CertificateChain {
    #[must_use]
    pub fn new(certificates: Vec<Certificate>) -> Self {
        Self { certificates }
    }

    #[must_use]
    pub fn leaf(&self) -> Option<&Certificate> {
        self.certificates.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Certificate> {
        self.certificates.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }
}

impl FromIterator<Certificate> for CertificateChain {
    fn from_iter<I: IntoIterator<Item = Certificate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pem_bundle_keeps_only_certificates() {
        let cert = pem::encode(&pem::Pem::new("CERTIFICATE", vec![0x30, 0x82, 0x01]));
        let key = pem::encode(&pem::Pem::new("PRIVATE KEY", vec![0x01, 0x02]));
        let bundle = format!("{cert}{key}{cert}");

        let parsed = Certificate::from_pem_bundle(bundle.as_bytes()).expect("bundle should parse");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].as_der(), &[0x30, 0x82, 0x01]);
    }

    #[test]
    fn pem_without_certificate_is_rejected() {
        let key = pem::encode(&pem::Pem::new("PRIVATE KEY", vec![0x01]));
        assert!(matches!(
            Certificate::from_pem(key.as_bytes()),
            Err(TlsError::CertificateParsing(_))
        ));
    }

    #[test]
    fn pem_round_trip_preserves_der() {
        let cert = Certificate::from_der(vec![0x30, 0x03, 0x02, 0x01, 0x05]);
        let reparsed = Certificate::from_pem(cert.to_pem().as_bytes()).expect("PEM should parse");
        assert_eq!(reparsed, cert);
    }
}
