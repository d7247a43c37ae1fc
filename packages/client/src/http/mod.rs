//! HTTP exchange types shared by the policy, authenticators and transports

pub mod compression;
pub mod request;
pub mod response;

pub use compression::DecompressionMethods;
pub use request::PreparedRequest;
pub use response::RawResponse;
