//! TLS-specific error types

#[derive(Debug, thiserror::Error)]
pub enum TlsError {
    #[error("Certificate parsing failed: {0}")]
    CertificateParsing(String),
    #[error("Certificate rejected: {0}")]
    CertificateRejected(String),
}
