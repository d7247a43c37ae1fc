//! Authenticator contract and the lock-free slot that holds it

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::config::ClientOptions;
use crate::error::Result;
use crate::http::PreparedRequest;

/// Adds authentication material to an outgoing request
///
/// Called once per attempt, redirects included, right before the request is
/// handed to the transport.
pub trait Authenticator: Send + Sync {
    /// Mutate or annotate the request with credentials
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials cannot be applied, for example when
    /// a token contains bytes that are not valid in a header.
    fn authenticate(&self, options: &ClientOptions, request: &mut PreparedRequest) -> Result<()>;

    /// Scheme name used in logs
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> Authenticator for F
where
    F: Fn(&ClientOptions, &mut PreparedRequest) -> Result<()> + Send + Sync,
{
    fn authenticate(&self, options: &ClientOptions, request: &mut PreparedRequest) -> Result<()> {
        self(options, request)
    }
}

/// Reference-counted authenticator as stored in the slot
pub type SharedAuthenticator = Arc<Box<dyn Authenticator>>;

/// Atomically swappable, optional authenticator
///
/// Readers get a fully formed reference to either the previous or the new
/// authenticator around a swap. An attempt that already loaded a reference
/// keeps using it until it finishes.
#[derive(Default)]
pub struct AuthenticatorSlot {
    inner: ArcSwapOption<Box<dyn Authenticator>>,
}

impl AuthenticatorSlot {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            inner: ArcSwapOption::empty(),
        }
    }

    #[must_use]
    pub fn new(authenticator: impl Authenticator + 'static) -> Self {
        let slot = Self::empty();
        slot.replace(authenticator);
        slot
    }

    /// Current authenticator, if any
    #[inline]
    #[must_use]
    pub fn load(&self) -> Option<SharedAuthenticator> {
        self.inner.load_full()
    }

    /// Install an authenticator, returning the previous one
    pub fn replace(&self, authenticator: impl Authenticator + 'static) -> Option<SharedAuthenticator> {
        let boxed: Box<dyn Authenticator> = Box::new(authenticator);
        self.store(Some(Arc::new(boxed)))
    }

    /// Install a shared authenticator or clear the slot, returning the previous value
    pub fn store(&self, authenticator: Option<SharedAuthenticator>) -> Option<SharedAuthenticator> {
        let current = authenticator.as_ref().map(|a| a.name());
        let previous = self.inner.swap(authenticator);
        tracing::debug!(
            previous = previous.as_ref().map(|a| a.name()),
            current,
            "authenticator swapped"
        );
        previous
    }

    /// Remove the authenticator, returning it
    pub fn take(&self) -> Option<SharedAuthenticator> {
        self.store(None)
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.inner.load().is_some()
    }
}

impl Clone for AuthenticatorSlot {
    fn clone(&self) -> Self {
        Self {
            inner: ArcSwapOption::new(self.load()),
        }
    }
}

impl fmt::Debug for AuthenticatorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.load() {
            Some(authenticator) => write!(f, "AuthenticatorSlot({})", authenticator.name()),
            None => f.write_str("AuthenticatorSlot(empty)"),
        }
    }
}
