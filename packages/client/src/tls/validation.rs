//! Remote certificate validation contract

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use super::certificate::{Certificate, CertificateChain};

/// Problems the transport's default verification found with a remote certificate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PolicyErrors(u8);

impl PolicyErrors {
    pub const NONE: Self = Self(0);
    /// The remote certificate was not presented.
    pub const NOT_AVAILABLE: Self = Self(1);
    /// The certificate does not match the requested host.
    pub const NAME_MISMATCH: Self = Self(1 << 1);
    /// The chain could not be built to a trusted root.
    pub const CHAIN_ERRORS: Self = Self(1 << 2);

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for PolicyErrors {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PolicyErrors {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for PolicyErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("PolicyErrors(NONE)");
        }
        let names: Vec<&str> = [
            (Self::NOT_AVAILABLE, "NOT_AVAILABLE"),
            (Self::NAME_MISMATCH, "NAME_MISMATCH"),
            (Self::CHAIN_ERRORS, "CHAIN_ERRORS"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect();
        write!(f, "PolicyErrors({})", names.join(" | "))
    }
}

/// Decides whether a remote certificate is acceptable.
///
/// When configured, the validator is the sole authority: its answer overrides
/// whatever `PolicyErrors` the transport computed.
pub trait CertificateValidator: Send + Sync {
    fn validate(
        &self,
        certificate: &Certificate,
        chain: &CertificateChain,
        errors: PolicyErrors,
    ) -> bool;
}

impl<F> CertificateValidator for F
where
    F: Fn(&Certificate, &CertificateChain, PolicyErrors) -> bool + Send + Sync,
{
    fn validate(
        &self,
        certificate: &Certificate,
        chain: &CertificateChain,
        errors: PolicyErrors,
    ) -> bool {
        self(certificate, chain, errors)
    }
}
