//! Configuration validation and defaults

use super::core::ClientOptions;
use crate::error::Result;

/// Reasons a configuration value is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Base URL cannot be empty")]
    EmptyBaseUrl,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported character encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("A default parameter named {0} already exists")]
    DuplicateDefaultParameter(String),
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a full configuration
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error carrying a `ConfigurationError` if:
    /// - `base_host` is set but blank or contains whitespace
    /// - `user_agent` is empty or contains control characters
    pub fn validate(options: &ClientOptions) -> Result<()> {
        if let Some(host) = &options.base_host {
            Self::validate_host(host, "base_host")?;
        }
        Self::validate_header_text(&options.user_agent, "user_agent")?;
        Ok(())
    }

    /// Validate a host override
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the host is blank or
    /// contains whitespace.
    pub fn validate_host(host: &str, name: &str) -> std::result::Result<(), ConfigurationError> {
        if host.trim().is_empty() {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} cannot be blank"
            )));
        }
        if host.chars().any(char::is_whitespace) {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} cannot contain whitespace"
            )));
        }
        Ok(())
    }

    /// Validate text destined for a header value
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the text is empty or
    /// contains control characters.
    pub fn validate_header_text(
        text: &str,
        name: &str,
    ) -> std::result::Result<(), ConfigurationError> {
        if text.is_empty() {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} cannot be empty"
            )));
        }
        if text.chars().any(char::is_control) {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} cannot contain control characters"
            )));
        }
        Ok(())
    }
}

impl ClientOptions {
    /// Check the configuration for values no request could use
    ///
    /// # Errors
    ///
    /// See [`ConfigValidator::validate`].
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}

/// Common configuration defaults
pub struct ConfigDefaults;

impl ConfigDefaults {
    pub const DEFAULT_USER_AGENT: &'static str = concat!("courier/", env!("CARGO_PKG_VERSION"));
    /// Redirect hops followed when `max_redirects` is unset
    pub const DEFAULT_MAX_REDIRECTS: u32 = 10;
}
