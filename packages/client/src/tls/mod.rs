//! TLS material carried by the client configuration
//!
//! The handshake itself belongs to the transport. This module only defines the
//! certificate containers and the validation contract a transport consults when
//! it has a remote certificate in hand.

pub mod certificate;
pub mod errors;
pub mod validation;

pub use certificate::{Certificate, CertificateChain};
pub use errors::TlsError;
pub use validation::{CertificateValidator, PolicyErrors};
