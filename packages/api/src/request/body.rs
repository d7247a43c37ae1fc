//! Request body handling
//!
//! Bodies are kept as text or bytes until execution, when text is transcoded
//! with the client's encoding and the content type gets its charset.

use bytes::Bytes;
use courier_client::config::ClientOptions;
use courier_client::error::Result;
use http::HeaderValue;

/// Content type enumeration for request bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// application/json content type
    ApplicationJson,
    /// application/x-www-form-urlencoded content type
    ApplicationFormUrlEncoded,
    /// application/xml content type
    ApplicationXml,
    /// application/octet-stream content type
    ApplicationOctetStream,
    /// text/plain content type
    TextPlain,
    /// text/html content type
    TextHtml,
}

impl ContentType {
    /// Convert content type to string representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::ApplicationJson => "application/json",
            ContentType::ApplicationFormUrlEncoded => "application/x-www-form-urlencoded",
            ContentType::ApplicationXml => "application/xml",
            ContentType::ApplicationOctetStream => "application/octet-stream",
            ContentType::TextPlain => "text/plain",
            ContentType::TextHtml => "text/html",
        }
    }

    /// Whether a charset parameter applies to this media type
    #[must_use]
    pub fn is_textual(self) -> bool {
        !matches!(self, ContentType::ApplicationOctetStream)
    }
}

impl From<&str> for ContentType {
    fn from(s: &str) -> Self {
        let media_type = s.split(';').next().unwrap_or_default().trim();
        match media_type {
            "application/x-www-form-urlencoded" => ContentType::ApplicationFormUrlEncoded,
            "application/xml" | "text/xml" => ContentType::ApplicationXml,
            "application/octet-stream" => ContentType::ApplicationOctetStream,
            "text/plain" => ContentType::TextPlain,
            "text/html" => ContentType::TextHtml,
            // Default fallback, includes application/json and unknown types
            _ => ContentType::ApplicationJson,
        }
    }
}

/// A request body waiting for the client's encoding settings
#[derive(Debug, Clone)]
pub enum RequestBody {
    Text {
        content: String,
        content_type: ContentType,
    },
    Bytes {
        content: Bytes,
        content_type: ContentType,
    },
    /// Form fields, encoded with the client's query encoder
    Form(Vec<(String, String)>),
}

impl RequestBody {
    #[must_use]
    pub fn content_type(&self) -> ContentType {
        match self {
            RequestBody::Text { content_type, .. } | RequestBody::Bytes { content_type, .. } => {
                *content_type
            }
            RequestBody::Form(_) => ContentType::ApplicationFormUrlEncoded,
        }
    }

    /// Render the wire bytes and the `Content-Type` value
    pub(crate) fn render(&self, options: &ClientOptions) -> Result<(Bytes, HeaderValue)> {
        let content_type = self.content_type();
        let bytes = match self {
            RequestBody::Text { content, .. } => {
                Bytes::from(options.encoding.encode(content).into_owned())
            }
            RequestBody::Bytes { content, .. } => content.clone(),
            RequestBody::Form(fields) => {
                let encoded = fields
                    .iter()
                    .map(|(name, value)| {
                        format!(
                            "{}={}",
                            options.encode_query_value(name),
                            options.encode_query_value(value)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("&");
                Bytes::from(encoded)
            }
        };

        let header = match options.charset() {
            Some(charset) if content_type.is_textual() => {
                HeaderValue::from_str(&format!("{}; charset={charset}", content_type.as_str()))?
            }
            _ => HeaderValue::from_static(content_type.as_str()),
        };

        Ok((bytes, header))
    }
}
