//! Core `RestRequest` structure and builder methods

use std::time::Duration;

use bytes::Bytes;
use courier_client::error::{self, Result};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;

use super::body::{ContentType, RequestBody};

/// Description of one call, resolved against the client options on execute
///
/// ```
/// use courier::RestRequest;
///
/// let request = RestRequest::get("orders/{id}")
///     .with_url_segment("id", "A/17")
///     .with_query_parameter("expand", "lines");
/// assert_eq!(request.resource(), "orders/{id}");
/// ```
#[derive(Debug, Clone)]
pub struct RestRequest {
    pub(crate) method: Method,
    pub(crate) resource: String,
    pub(crate) url_segments: Vec<(String, String)>,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<RequestBody>,
    pub(crate) timeout: Option<Duration>,
}

impl RestRequest {
    /// `resource` is relative to the base URL unless it is absolute
    pub fn new(method: Method, resource: impl Into<String>) -> Self {
        Self {
            method,
            resource: resource.into(),
            url_segments: Vec::new(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn get(resource: impl Into<String>) -> Self {
        Self::new(Method::GET, resource)
    }

    pub fn post(resource: impl Into<String>) -> Self {
        Self::new(Method::POST, resource)
    }

    pub fn put(resource: impl Into<String>) -> Self {
        Self::new(Method::PUT, resource)
    }

    pub fn patch(resource: impl Into<String>) -> Self {
        Self::new(Method::PATCH, resource)
    }

    pub fn delete(resource: impl Into<String>) -> Self {
        Self::new(Method::DELETE, resource)
    }

    pub fn head(resource: impl Into<String>) -> Self {
        Self::new(Method::HEAD, resource)
    }

    /// Replace `{name}` in the resource with `value`, encoded by the client's
    /// value encoder
    #[must_use]
    pub fn with_url_segment(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.url_segments.push((name.into(), value.into()));
        self
    }

    /// Append a query parameter, encoded by the client's query encoder
    #[must_use]
    pub fn with_query_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Add a header; it overrides any header the client would set itself
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Serialize `body` as JSON
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `body` cannot be serialized.
    pub fn with_json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let content = serde_json::to_string(body).map_err(error::invalid_argument)?;
        self.body = Some(RequestBody::Text {
            content,
            content_type: ContentType::ApplicationJson,
        });
        Ok(self)
    }

    #[must_use]
    pub fn with_text_body(mut self, content: impl Into<String>, content_type: ContentType) -> Self {
        self.body = Some(RequestBody::Text {
            content: content.into(),
            content_type,
        });
        self
    }

    #[must_use]
    pub fn with_bytes_body(mut self, content: impl Into<Bytes>, content_type: ContentType) -> Self {
        self.body = Some(RequestBody::Bytes {
            content: content.into(),
            content_type,
        });
        self
    }

    /// Add a form field; switches the body to form-urlencoded
    #[must_use]
    pub fn with_form_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let field = (name.into(), value.into());
        match &mut self.body {
            Some(RequestBody::Form(fields)) => fields.push(field),
            _ => self.body = Some(RequestBody::Form(vec![field])),
        }
        self
    }

    /// Per-request timeout; the client's cap still applies
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }
}
