//! Resolution of a `RestRequest` into the first `PreparedRequest`

use courier_client::config::ClientOptions;
use courier_client::error::{self, Result};
use courier_client::http::PreparedRequest;
use http::header::{ACCEPT_ENCODING, CACHE_CONTROL, CONTENT_TYPE, EXPECT, HOST, USER_AGENT};
use http::{HeaderMap, HeaderValue};
use url::Url;

use super::RestClient;
use crate::request::RestRequest;

impl RestClient {
    /// Resolve URL, headers, body and timeout for the first attempt
    pub(crate) fn prepare(&self, request: &RestRequest) -> Result<PreparedRequest> {
        let options = &*self.options;
        let url = build_url(options, request, &self.default_parameters)?;

        let mut headers = default_headers(options)?;
        let mut body = None;
        if let Some(request_body) = &request.body {
            let (bytes, content_type) = request_body.render(options)?;
            headers.insert(CONTENT_TYPE, content_type);
            body = Some(bytes);
        }
        if body.is_some() && options.expect_continue == Some(true) {
            headers.insert(EXPECT, HeaderValue::from_static("100-continue"));
        }
        // Request headers win over anything derived from the options
        for (name, value) in &request.headers {
            headers.insert(name.clone(), value.clone());
        }

        let mut prepared = PreparedRequest::new(request.method.clone(), url)
            .with_timeout(options.effective_timeout(request.timeout));
        prepared.headers = headers;
        prepared.body = body;
        Ok(prepared)
    }
}

fn default_headers(options: &ClientOptions) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    if !options.user_agent.is_empty() {
        headers.insert(USER_AGENT, HeaderValue::from_str(&options.user_agent)?);
    }
    if let Some(host) = options.base_host() {
        headers.insert(HOST, HeaderValue::from_str(host)?);
    }
    if let Some(accept) = options.automatic_decompression.accept_encoding() {
        headers.insert(ACCEPT_ENCODING, accept);
    }
    if let Some(cache) = options
        .cache_policy
        .as_ref()
        .and_then(|policy| policy.to_header_value())
    {
        headers.insert(CACHE_CONTROL, cache);
    }

    Ok(headers)
}

/// Resolve the resource against the base URL and append the query
pub(crate) fn build_url(
    options: &ClientOptions,
    request: &RestRequest,
    default_parameters: &[(String, String)],
) -> Result<Url> {
    let resource = substitute_segments(options, &request.resource, &request.url_segments)?;

    let mut url = match Url::parse(&resource) {
        Ok(absolute) if absolute.has_host() => absolute,
        _ => {
            let base = options.base_url().ok_or_else(|| {
                error::invalid_argument(format!(
                    "relative resource without a base URL: {resource}"
                ))
            })?;
            join(base, &resource)?
        }
    };

    let mut pairs: Vec<String> = request
        .query
        .iter()
        .map(|(name, value)| encode_pair(options, name, value))
        .collect();
    // Defaults only fill in names the request did not set
    pairs.extend(
        default_parameters
            .iter()
            .filter(|(name, _)| !request.query.iter().any(|(n, _)| n == name))
            .map(|(name, value)| encode_pair(options, name, value)),
    );

    // `set_query` still escapes what the query encoder left unsafe
    if !pairs.is_empty() {
        let appended = pairs.join("&");
        let query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{appended}"),
            _ => appended,
        };
        url.set_query(Some(&query));
    }

    Ok(url)
}

/// Replace `{name}` placeholders in one left-to-right pass over `resource`
///
/// Encoded values are never scanned again, so a value that happens to look
/// like a placeholder stays as encoded.
fn substitute_segments(
    options: &ClientOptions,
    resource: &str,
    segments: &[(String, String)],
) -> Result<String> {
    if let Some((name, _)) = segments
        .iter()
        .find(|(name, _)| !resource.contains(&format!("{{{name}}}")))
    {
        return Err(error::invalid_argument(format!(
            "resource has no segment named {name}"
        )));
    }

    let mut resolved = String::with_capacity(resource.len());
    let mut rest = resource;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|offset| open + offset) else {
            break;
        };
        let name = &rest[open + 1..close];
        // The last value set for a name wins
        let Some((_, value)) = segments.iter().rev().find(|(n, _)| n == name) else {
            return Err(error::invalid_argument(format!(
                "unresolved segment {{{name}}} in resource: {resource}"
            )));
        };
        resolved.push_str(&rest[..open]);
        resolved.push_str(&options.encode_value(value));
        rest = &rest[close + 1..];
    }
    resolved.push_str(rest);
    Ok(resolved)
}

fn encode_pair(options: &ClientOptions, name: &str, value: &str) -> String {
    format!(
        "{}={}",
        options.encode_query_value(name),
        options.encode_query_value(value)
    )
}

/// Append `resource` to the base path instead of replacing its last segment
fn join(base: &Url, resource: &str) -> Result<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(resource.trim_start_matches('/'))?)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use courier_client::cache::CacheControl;
    use courier_client::encoding::TextEncoding;
    use courier_client::http::{DecompressionMethods, RawResponse};
    use courier_client::transport::{TransportHandler, TransportSettings};
    use futures::future::BoxFuture;
    use http::Method;

    use super::*;

    struct Unused;

    impl TransportHandler for Unused {
        fn send<'a>(
            &'a self,
            request: PreparedRequest,
            _settings: &'a TransportSettings,
        ) -> BoxFuture<'a, Result<RawResponse>> {
            Box::pin(async move { Err(error::transport(format!("unused: {}", request.url))) })
        }
    }

    fn client(options: ClientOptions) -> RestClient {
        RestClient::new(options, Arc::new(Unused))
    }

    fn options() -> ClientOptions {
        ClientOptions::from_base_url("https://api.example.com/v1").expect("base url")
    }

    #[test]
    fn resource_is_appended_to_base_path() {
        let url = build_url(&options(), &RestRequest::get("/users"), &[]).expect("url");
        assert_eq!(url.as_str(), "https://api.example.com/v1/users");
    }

    #[test]
    fn absolute_resource_ignores_base() {
        let url = build_url(&options(), &RestRequest::get("https://other.example.com/x"), &[])
            .expect("url");
        assert_eq!(url.as_str(), "https://other.example.com/x");
    }

    #[test]
    fn segments_use_value_encoder_and_query_uses_query_encoder() {
        let request = RestRequest::get("files/{name}")
            .with_url_segment("name", "a b/c")
            .with_query_parameter("q", "x&y");
        let url = build_url(&options(), &request, &[]).expect("url");
        assert_eq!(url.path(), "/v1/files/a%20b%2Fc");
        assert_eq!(url.query(), Some("q=x%26y"));
    }

    #[test]
    fn default_parameters_fill_missing_names_only() {
        let defaults = vec![
            ("api-version".to_string(), "2".to_string()),
            ("q".to_string(), "ignored".to_string()),
        ];
        let request = RestRequest::get("search").with_query_parameter("q", "rust");
        let url = build_url(&options(), &request, &defaults).expect("url");
        assert_eq!(url.query(), Some("q=rust&api-version=2"));
    }

    #[test]
    fn unresolved_segment_is_invalid() {
        let err = build_url(&options(), &RestRequest::get("users/{id}"), &[])
            .expect_err("missing segment");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn encoded_segment_values_are_not_substituted_again() {
        let options = options().with_value_encoder(|value: &str| format!("{{{value}}}"));
        let request = RestRequest::get("a/{first}/{second}")
            .with_url_segment("first", "second")
            .with_url_segment("second", "x");
        let url = build_url(&options, &request, &[]).expect("url");
        assert_eq!(url.path(), "/v1/a/%7Bsecond%7D/%7Bx%7D");
    }

    #[test]
    fn repeated_segment_name_uses_last_value() {
        let request = RestRequest::get("users/{id}/posts/{id}")
            .with_url_segment("id", "1")
            .with_url_segment("id", "2");
        let url = build_url(&options(), &request, &[]).expect("url");
        assert_eq!(url.path(), "/v1/users/2/posts/2");
    }

    #[test]
    fn unused_segment_is_invalid() {
        let request = RestRequest::get("users").with_url_segment("id", "1");
        let err = build_url(&options(), &request, &[]).expect_err("unused segment");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn query_characters_left_unsafe_by_the_encoder_are_escaped() {
        let options = options().with_query_encoder(|value: &str, _: TextEncoding| value.to_string());
        let request = RestRequest::get("search").with_query_parameter("q", "a b");
        let url = build_url(&options, &request, &[]).expect("url");
        assert_eq!(url.query(), Some("q=a%20b"));
    }

    #[test]
    fn relative_resource_needs_base() {
        let err = build_url(&ClientOptions::new(), &RestRequest::get("users"), &[])
            .expect_err("no base");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn headers_follow_options() {
        let options = options()
            .with_base_host("internal.example.com")
            .with_cache_policy(CacheControl::no_cache())
            .with_automatic_decompression(DecompressionMethods::GZIP)
            .with_expect_continue(true)
            .with_max_timeout(Duration::from_millis(5000));
        let request = RestRequest::post("items")
            .with_text_body("{}", crate::ContentType::ApplicationJson)
            .with_timeout(Duration::from_millis(2000));

        let prepared = client(options).prepare(&request).expect("prepared");
        assert_eq!(prepared.method, Method::POST);
        assert_eq!(prepared.headers[HOST], "internal.example.com");
        assert_eq!(prepared.headers[ACCEPT_ENCODING], "gzip");
        assert_eq!(prepared.headers[CACHE_CONTROL], "no-cache");
        assert_eq!(prepared.headers[EXPECT], "100-continue");
        assert_eq!(prepared.headers[CONTENT_TYPE], "application/json; charset=UTF-8");
        assert_eq!(prepared.timeout, Some(Duration::from_millis(2000)));
        assert!(prepared.headers.contains_key(USER_AGENT));
    }

    #[test]
    fn request_headers_override_defaults() {
        let request = RestRequest::get("items")
            .with_header(USER_AGENT, HeaderValue::from_static("custom/1.0"));
        let prepared = client(options()).prepare(&request).expect("prepared");
        assert_eq!(prepared.headers[USER_AGENT], "custom/1.0");
    }
}
