//! Default implementations for client configuration

use std::sync::Arc;

use super::super::validation::ConfigDefaults;
use super::types::ClientOptions;
use crate::auth::AuthenticatorSlot;
use crate::encoding::{DefaultQueryEncoder, DefaultValueEncoder, TextEncoding};
use crate::http::DecompressionMethods;
use crate::policy::{DefaultClassifier, ErrorPolicy};

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            base_host: None,
            user_agent: ConfigDefaults::DEFAULT_USER_AGENT.to_string(),

            authenticator: AuthenticatorSlot::empty(),
            handler_decorator: None,

            client_certificates: Vec::new(),
            credentials: None,
            use_default_credentials: false,
            pre_authenticate: false,
            certificate_validator: None,

            proxy: None,
            cache_policy: None,
            follow_redirects: true,
            max_redirects: None,
            max_timeout: None,
            automatic_decompression: DecompressionMethods::ALL,
            expect_continue: None,

            encoding: TextEncoding::UTF_8,
            disable_charset: false,
            value_encoder: Arc::new(DefaultValueEncoder),
            query_encoder: Arc::new(DefaultQueryEncoder),
            allow_duplicate_default_parameter_names: false,

            classifier: Arc::new(DefaultClassifier),
            error_policy: ErrorPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = ClientOptions::default();

        assert!(options.base_url.is_none());
        assert!(options.follow_redirects);
        assert_eq!(options.max_redirects, None);
        assert_eq!(options.max_timeout, None);
        assert_eq!(options.expect_continue, None);
        assert_eq!(options.encoding, TextEncoding::UTF_8);
        assert!(!options.disable_charset);
        assert!(!options.error_policy.throw_on_deserialization_error);
        assert!(options.error_policy.fail_on_deserialization_error);
        assert!(!options.error_policy.throw_on_any_error);
        assert!(options.authenticator.load().is_none());
        assert!(options.user_agent.starts_with("courier/"));
    }
}
