//! Test doubles shared by the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use courier::auth::Authenticator;
use courier::error::{self, Result};
use courier::http::{PreparedRequest, RawResponse};
use courier::transport::{TransportHandler, TransportSettings};
use courier::ClientOptions;
use futures::future::BoxFuture;
use http::header::LOCATION;
use http::{HeaderName, HeaderValue, StatusCode};
use tokio::sync::Notify;

/// What the fake transport answers with, in order
pub enum Reply {
    Respond {
        status: StatusCode,
        body: &'static str,
    },
    Redirect {
        status: StatusCode,
        location: &'static str,
    },
    Refuse,
    RejectCertificate,
    Hang,
    /// Answer `200 OK` once the test opens the gate
    Gated(Gate),
}

/// Holds a reply inside the transport until the test releases it
#[derive(Clone, Default)]
pub struct Gate {
    reached: Arc<Notify>,
    released: Arc<Notify>,
}

impl Gate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until a request is parked in the transport
    pub async fn reached(&self) {
        self.reached.notified().await;
    }

    pub fn release(&self) {
        self.released.notify_one();
    }
}

impl Reply {
    pub fn ok(body: &'static str) -> Self {
        Reply::Respond {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn status(status: u16, body: &'static str) -> Self {
        Reply::Respond {
            status: StatusCode::from_u16(status).expect("valid status"),
            body,
        }
    }

    pub fn redirect(status: u16, location: &'static str) -> Self {
        Reply::Redirect {
            status: StatusCode::from_u16(status).expect("valid status"),
            location,
        }
    }
}

/// Scripted transport that records every attempt it receives
///
/// Once the script runs out it keeps answering with the last reply's shape
/// for redirects, or `200 OK` with an empty body otherwise.
#[derive(Default)]
pub struct FakeTransport {
    replies: Mutex<VecDeque<Reply>>,
    repeat_redirect: Mutex<Option<(StatusCode, &'static str)>>,
    seen: Mutex<Vec<PreparedRequest>>,
}

impl FakeTransport {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            ..Self::default()
        })
    }

    /// Answer every attempt with the same redirect
    pub fn redirect_forever(status: u16, location: &'static str) -> Arc<Self> {
        let transport = Self::default();
        *transport.repeat_redirect.lock().expect("lock") = Some((
            StatusCode::from_u16(status).expect("valid status"),
            location,
        ));
        Arc::new(transport)
    }

    pub fn seen(&self) -> Vec<PreparedRequest> {
        self.seen.lock().expect("lock").clone()
    }

    pub fn sends(&self) -> usize {
        self.seen.lock().expect("lock").len()
    }
}

impl TransportHandler for FakeTransport {
    fn send<'a>(
        &'a self,
        request: PreparedRequest,
        _settings: &'a TransportSettings,
    ) -> BoxFuture<'a, Result<RawResponse>> {
        self.seen.lock().expect("lock").push(request.clone());
        let reply = self.replies.lock().expect("lock").pop_front();
        let repeat = *self.repeat_redirect.lock().expect("lock");
        let reply = match (reply, repeat) {
            (Some(reply), _) => reply,
            (None, Some((status, location))) => Reply::Redirect { status, location },
            (None, None) => Reply::ok(""),
        };
        let url = request.url;

        Box::pin(async move {
            match reply {
                Reply::Respond { status, body } => Ok(RawResponse::new(url, status).with_body(body)),
                Reply::Redirect { status, location } => Ok(RawResponse::new(url, status)
                    .with_header(LOCATION, HeaderValue::from_static(location))),
                Reply::Refuse => Err(error::transport("connection refused")),
                Reply::RejectCertificate => {
                    Err(error::certificate_validation("remote certificate rejected"))
                }
                Reply::Hang => std::future::pending().await,
                Reply::Gated(gate) => {
                    gate.reached.notify_one();
                    gate.released.notified().await;
                    Ok(RawResponse::new(url, StatusCode::OK))
                }
            }
        })
    }
}

/// Records each attempt it authenticates and stamps a header with its tag
pub struct RecordingAuthenticator {
    tag: &'static str,
    calls: Arc<AtomicUsize>,
}

impl RecordingAuthenticator {
    pub fn new(tag: &'static str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                tag,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl Authenticator for RecordingAuthenticator {
    fn authenticate(&self, _options: &ClientOptions, request: &mut PreparedRequest) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        request
            .headers
            .insert(auth_header(), HeaderValue::from_static(self.tag));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

pub fn auth_header() -> HeaderName {
    HeaderName::from_static("x-test-auth")
}

pub fn options() -> ClientOptions {
    ClientOptions::from_base_url("https://api.example.com/v1/").expect("base url")
}
