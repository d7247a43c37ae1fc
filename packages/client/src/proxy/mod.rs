//! Proxy routing settings
//!
//! A [`Proxy`] is pure configuration: it names the proxy endpoint, the traffic
//! it intercepts and the hosts that bypass it. Tunnelling is the transport's
//! job.

mod no_proxy;
mod types;

pub use no_proxy::NoProxy;
pub use types::{Intercept, Proxy};
