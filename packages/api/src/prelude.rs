//! Everything needed to configure a client and run requests

pub use courier_client::prelude::*;

pub use crate::client::RestClient;
pub use crate::request::{ContentType, RestRequest};
pub use crate::response::RestResponse;
