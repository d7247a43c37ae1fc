//! Core `RestClient` structure and construction

use std::fmt;
use std::sync::Arc;

use courier_client::auth::{Authenticator, SharedAuthenticator};
use courier_client::config::{ClientOptions, ConfigurationError};
use courier_client::error::{self, Result};
use courier_client::transport::{SharedTransport, TransportSettings};

/// REST client bound to one configuration and one transport
///
/// Cheap to share behind an `Arc`; every method takes `&self` and concurrent
/// requests only read the options.
pub struct RestClient {
    pub(crate) options: Arc<ClientOptions>,
    pub(crate) transport: SharedTransport,
    pub(crate) settings: TransportSettings,
    pub(crate) default_parameters: Vec<(String, String)>,
}

impl RestClient {
    /// Build a client, wrapping `transport` with the configured decorator once
    pub fn new(options: ClientOptions, transport: SharedTransport) -> Self {
        let transport = match &options.handler_decorator {
            Some(decorator) => {
                tracing::debug!("applying transport handler decorator");
                decorator.decorate(transport)
            }
            None => transport,
        };
        let settings = TransportSettings::from_options(&options);

        Self {
            options: Arc::new(options),
            transport,
            settings,
            default_parameters: Vec::new(),
        }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Swap the authenticator used by subsequent attempts
    ///
    /// Attempts already holding the previous authenticator finish with it.
    pub fn set_authenticator(
        &self,
        authenticator: impl Authenticator + 'static,
    ) -> Option<SharedAuthenticator> {
        self.options.authenticator.replace(authenticator)
    }

    /// Remove the authenticator, returning the previous one
    pub fn clear_authenticator(&self) -> Option<SharedAuthenticator> {
        self.options.authenticator.take()
    }

    /// Query parameter added to every request that does not set it itself
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error when a default parameter with the
    /// same name exists and duplicates are not allowed.
    pub fn add_default_parameter(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigurationError::InvalidParameter(
                "default parameter name is empty".to_string(),
            )
            .into());
        }

        if !self.options.allow_duplicate_default_parameter_names
            && self.default_parameters.iter().any(|(n, _)| *n == name)
        {
            return Err(error::invalid_argument(
                ConfigurationError::DuplicateDefaultParameter(name),
            ));
        }

        self.default_parameters.push((name, value.into()));
        Ok(())
    }

    /// Builder form of [`RestClient::add_default_parameter`]
    ///
    /// # Errors
    ///
    /// Same as [`RestClient::add_default_parameter`].
    pub fn with_default_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        self.add_default_parameter(name, value)?;
        Ok(self)
    }

    pub fn default_parameters(&self) -> &[(String, String)] {
        &self.default_parameters
    }
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("options", &self.options)
            .field("settings", &self.settings)
            .field("default_parameters", &self.default_parameters)
            .finish_non_exhaustive()
    }
}
