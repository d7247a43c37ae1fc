//! Integration tests for the client options surface

use std::sync::Arc;
use std::thread;

use courier_client::auth::{ApiKey, BasicAuth, BearerToken};
use courier_client::config::ClientOptions;
use courier_client::encoding::{TextEncoding, percent_decode};
use courier_client::http::PreparedRequest;
use http::Method;
use http::header::AUTHORIZATION;
use url::Url;

#[test]
fn test_base_url_round_trips() {
    for input in [
        "https://api.example.com/",
        "http://localhost:8080/v1/",
        "https://user@example.com/path?x=1",
    ] {
        let options = ClientOptions::from_base_url(input).expect("valid url");
        let expected = Url::parse(input).expect("valid url");
        assert_eq!(options.base_url(), Some(&expected));
    }
}

#[test]
fn test_unusable_base_urls_are_invalid_arguments() {
    for input in ["", "   ", "not a url", "mailto:someone@example.com"] {
        let err = ClientOptions::from_base_url(input).expect_err("rejected");
        assert!(err.is_invalid_argument(), "{input:?}: {err}");
    }
}

#[test]
fn test_default_encoders_round_trip_reserved_characters() {
    let options = ClientOptions::new();
    let input = "a/b?c=d&e#f g%h+i";
    assert_eq!(
        percent_decode(&options.encode_value(input)).as_deref(),
        Some(input)
    );
    assert_eq!(
        percent_decode(&options.encode_query_value(input)).as_deref(),
        Some(input)
    );
}

#[test]
fn test_query_encoder_follows_configured_encoding() {
    let options = ClientOptions::new().with_encoding(TextEncoding::WINDOWS_1252);
    assert_eq!(options.encode_query_value("café"), "caf%E9");
    assert_eq!(options.encode_value("café"), "caf%C3%A9");
}

#[test]
fn test_reference_authenticators_annotate_requests() {
    let options = ClientOptions::from_base_url("https://api.example.com/").expect("url");
    let url = Url::parse("https://api.example.com/items").expect("url");

    let bearer = options.clone().with_authenticator(BearerToken::new("t0k"));
    let mut request = PreparedRequest::new(Method::GET, url.clone());
    let authenticator = bearer.authenticator.load().expect("set");
    authenticator
        .authenticate(&bearer, &mut request)
        .expect("authenticated");
    assert_eq!(request.headers[AUTHORIZATION], "Bearer t0k");
    assert!(request.headers[AUTHORIZATION].is_sensitive());

    let basic = options
        .clone()
        .with_authenticator(BasicAuth::new("Aladdin", Some("open sesame".to_string())));
    let mut request = PreparedRequest::new(Method::GET, url.clone());
    basic
        .authenticator
        .load()
        .expect("set")
        .authenticate(&basic, &mut request)
        .expect("authenticated");
    assert_eq!(
        request.headers[AUTHORIZATION],
        "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
    );

    let api_key = options.with_authenticator(ApiKey::query("key", "s3cr3t"));
    let mut request = PreparedRequest::new(Method::GET, url);
    api_key
        .authenticator
        .load()
        .expect("set")
        .authenticate(&api_key, &mut request)
        .expect("authenticated");
    assert_eq!(request.url.query(), Some("key=s3cr3t"));
}

#[test]
fn test_authenticator_swaps_are_visible_across_threads() {
    let options = Arc::new(ClientOptions::new().with_authenticator(BearerToken::new("a")));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let options = Arc::clone(&options);
            thread::spawn(move || {
                for _ in 0..1000 {
                    let current = options.authenticator.load().expect("never empty");
                    assert_eq!(current.name(), "Bearer");
                }
            })
        })
        .collect();

    for _ in 0..100 {
        options.authenticator.replace(BearerToken::new("b"));
    }
    for reader in readers {
        reader.join().expect("reader");
    }
}
