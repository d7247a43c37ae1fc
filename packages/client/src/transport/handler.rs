use std::sync::Arc;

use futures::future::BoxFuture;

use super::TransportSettings;
use crate::error::Result;
use crate::http::{PreparedRequest, RawResponse};

/// Performs one network exchange
///
/// Return `Ok` for every exchange that produced a response, whatever its
/// status. `Err` is reserved for failures where no response exists: refused
/// connections, DNS errors, rejected certificates.
pub trait TransportHandler: Send + Sync {
    fn send<'a>(
        &'a self,
        request: PreparedRequest,
        settings: &'a TransportSettings,
    ) -> BoxFuture<'a, Result<RawResponse>>;
}

pub type SharedTransport = Arc<dyn TransportHandler>;

impl<T: TransportHandler + ?Sized> TransportHandler for Arc<T> {
    fn send<'a>(
        &'a self,
        request: PreparedRequest,
        settings: &'a TransportSettings,
    ) -> BoxFuture<'a, Result<RawResponse>> {
        (**self).send(request, settings)
    }
}
