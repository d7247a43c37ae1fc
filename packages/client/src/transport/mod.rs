//! Transport contract
//!
//! The client never opens sockets itself. It hands each prepared attempt to a
//! [`TransportHandler`] together with a [`TransportSettings`] snapshot of the
//! transport-adjacent configuration.

mod decorator;
mod handler;
mod settings;

pub use decorator::HandlerDecorator;
pub use handler::{SharedTransport, TransportHandler};
pub use settings::TransportSettings;
