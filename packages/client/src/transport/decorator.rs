use super::SharedTransport;

/// Wraps the transport once, when the client is built
///
/// Use it to layer logging, retries or fault injection around whatever
/// transport the caller supplied.
pub trait HandlerDecorator: Send + Sync {
    fn decorate(&self, inner: SharedTransport) -> SharedTransport;
}

impl<F> HandlerDecorator for F
where
    F: Fn(SharedTransport) -> SharedTransport + Send + Sync,
{
    fn decorate(&self, inner: SharedTransport) -> SharedTransport {
        self(inner)
    }
}
