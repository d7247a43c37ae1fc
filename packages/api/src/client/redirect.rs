//! Redirect handling
//!
//! Only the five redirecting status codes with a usable `Location` are
//! followed. The caller decides whether the limit allows another hop.

use courier_client::http::{PreparedRequest, RawResponse};
use http::header::{
    AUTHORIZATION, CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE, COOKIE, EXPECT, HOST, LOCATION,
    PROXY_AUTHORIZATION, REFERER, WWW_AUTHENTICATE,
};
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use url::Url;

/// The follow-up attempt for a redirect response, `None` if `response` is not
/// a followable redirect
pub(crate) fn next_attempt(previous: &PreparedRequest, response: &RawResponse) -> Option<PreparedRequest> {
    let status = response.status?;
    if !matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    ) {
        return None;
    }

    let location = response.header_str(LOCATION)?;
    let next_url = match response.url.join(location) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!(location, error = %e, "ignoring unparsable redirect location");
            return None;
        }
    };
    if next_url.scheme() != "http" && next_url.scheme() != "https" {
        tracing::debug!(url = %next_url, "ignoring redirect to unsupported scheme");
        return None;
    }

    let mut next = previous.clone();
    next.attempt = previous.attempt.saturating_add(1);

    if switches_to_get(status, &previous.method) {
        next.method = Method::GET;
        next.body = None;
        for name in [CONTENT_TYPE, CONTENT_LENGTH, CONTENT_ENCODING, EXPECT] {
            next.headers.remove(name);
        }
    }

    remove_sensitive_headers(&mut next.headers, &next_url, &previous.url);
    next.headers.remove(REFERER);
    if let Some(referer) = make_referer(&next_url, &previous.url) {
        next.headers.insert(REFERER, referer);
    }
    next.url = next_url;

    Some(next)
}

/// 303 always becomes GET (except HEAD); 301 and 302 do so for POST
fn switches_to_get(status: StatusCode, method: &Method) -> bool {
    match status {
        StatusCode::SEE_OTHER => *method != Method::HEAD,
        StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND => *method == Method::POST,
        _ => false,
    }
}

/// Remove sensitive headers when redirecting across different hosts/ports
fn remove_sensitive_headers(headers: &mut HeaderMap, next: &Url, previous: &Url) {
    let cross_host = next.host_str() != previous.host_str()
        || next.port_or_known_default() != previous.port_or_known_default();
    if cross_host {
        headers.remove(AUTHORIZATION);
        headers.remove(COOKIE);
        headers.remove(PROXY_AUTHORIZATION);
        headers.remove(WWW_AUTHENTICATE);
        headers.remove(HOST);
    }
}

/// Referer for the next hop, omitted on an HTTPS to HTTP downgrade
fn make_referer(next: &Url, previous: &Url) -> Option<HeaderValue> {
    if next.scheme() == "http" && previous.scheme() == "https" {
        return None;
    }

    let mut referer = previous.clone();
    let _ = referer.set_username("");
    let _ = referer.set_password(None);
    referer.set_fragment(None);
    referer.as_str().parse().ok()
}
