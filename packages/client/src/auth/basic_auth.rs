//! Basic authentication utilities

use std::fmt;
use std::io::Write;

use base64::prelude::BASE64_STANDARD;
use base64::write::EncoderWriter;
use http::HeaderValue;
use zeroize::Zeroizing;

use super::Authenticator;
use crate::config::ClientOptions;
use crate::error::{self, Result};
use crate::http::PreparedRequest;

/// Build a sensitive `Authorization: Basic ...` header value
///
/// # Errors
///
/// Returns an `Authentication` error if the encoded credentials do not form a
/// valid header value.
pub fn basic_auth<U, P>(username: U, password: Option<P>) -> Result<HeaderValue>
where
    U: fmt::Display,
    P: fmt::Display,
{
    let mut buf = b"Basic ".to_vec();
    {
        let mut encoder = EncoderWriter::new(&mut buf, &BASE64_STANDARD);
        // Writes into a Vec cannot fail.
        let _ = write!(encoder, "{username}:");
        if let Some(password) = password {
            let _ = write!(encoder, "{password}");
        }
    }
    let mut header = HeaderValue::from_bytes(&buf)
        .map_err(|e| error::authentication(format!("Invalid authorization header: {e}")))?;
    header.set_sensitive(true);
    Ok(header)
}

/// Basic authentication provider
#[derive(Clone)]
pub struct BasicAuth {
    username: String,
    password: Option<Zeroizing<String>>,
}

impl BasicAuth {
    #[must_use]
    pub fn new(username: impl Into<String>, password: Option<String>) -> Self {
        Self {
            username: username.into(),
            password: password.map(Zeroizing::new),
        }
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Authenticator for BasicAuth {
    fn authenticate(&self, _options: &ClientOptions, request: &mut PreparedRequest) -> Result<()> {
        let value = basic_auth(&self.username, self.password.as_ref().map(|p| p.as_str()))?;
        request.headers.insert(http::header::AUTHORIZATION, value);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Basic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_username_and_password() {
        let value = basic_auth("Aladdin", Some("open sesame")).expect("valid credentials");
        assert_eq!(value, "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
        assert!(value.is_sensitive());
    }

    #[test]
    fn password_is_optional() {
        let value = basic_auth("user", None::<&str>).expect("valid credentials");
        assert_eq!(value, "Basic dXNlcjo=");
    }
}
