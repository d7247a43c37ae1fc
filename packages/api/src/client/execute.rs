//! The request pipeline: prepare, authenticate, send, redirect, classify,
//! deserialize and surface failures per the error policy

use courier_client::config::ConfigDefaults;
use courier_client::error::{self, Error, Result};
use courier_client::http::{PreparedRequest, RawResponse};
use courier_client::policy::{DeserializationAction, FailureAction, ResponseStatus};
use serde::de::DeserializeOwned;
use url::Url;

use super::RestClient;
use super::redirect::next_attempt;
use crate::request::RestRequest;
use crate::response::RestResponse;

/// How an exchange ended before classification
enum Exchange {
    Response(RawResponse),
    /// Preparation of an attempt failed, nothing was sent for it
    Aborted { url: Url, error: Error },
}

impl RestClient {
    /// Execute `request` and deserialize a completed body as JSON into `T`
    ///
    /// Failures are captured into the returned [`RestResponse`] unless the
    /// error policy says to raise them.
    ///
    /// # Errors
    ///
    /// - `Deserialization` when the body does not match `T` and
    ///   `throw_on_deserialization_error` is set
    /// - any captured failure (preparation, transport, timeout, classified
    ///   error status) when `throw_on_any_error` is set. A deserialization
    ///   failure marked on the response is never raised by that switch.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: RestRequest,
    ) -> Result<RestResponse<T>> {
        let prepared = match self.prepare(&request) {
            Ok(prepared) => prepared,
            Err(err) => {
                tracing::debug!(resource = %request.resource, error = %err, "request preparation failed");
                return self.surface(RestResponse::failed(ResponseStatus::Aborted, None, err));
            }
        };

        let url = prepared.url.clone();
        let exchange = match prepared.timeout {
            Some(limit) => match tokio::time::timeout(limit, self.exchange(prepared)).await {
                Ok(exchange) => exchange,
                Err(_) => {
                    tracing::debug!(%url, timeout_ms = limit.as_millis(), "request timed out");
                    let err = error::timeout(limit).with_url(url.clone());
                    return self.surface(RestResponse::failed(
                        ResponseStatus::TimedOut,
                        Some(url),
                        err,
                    ));
                }
            },
            None => self.exchange(prepared).await,
        };

        match exchange {
            Exchange::Response(raw) => self.complete(raw),
            Exchange::Aborted { url, error } => self.surface(RestResponse::failed(
                ResponseStatus::Aborted,
                Some(url),
                error,
            )),
        }
    }

    /// Run attempts until a non-redirect outcome or the redirect limit
    async fn exchange(&self, mut request: PreparedRequest) -> Exchange {
        let limit = if self.options.follow_redirects {
            self.options
                .max_redirects
                .unwrap_or(ConfigDefaults::DEFAULT_MAX_REDIRECTS)
        } else {
            0
        };

        loop {
            if let Err(error) = self.authenticate(&mut request) {
                return Exchange::Aborted {
                    url: request.url,
                    error,
                };
            }

            let url = request.url.clone();
            tracing::trace!(method = %request.method, %url, attempt = request.attempt, "sending");
            let response = match self.transport.send(request.clone(), &self.settings).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::debug!(%url, error = %err, "transport failed");
                    let err = if err.url().is_some() { err } else { err.with_url(url.clone()) };
                    return Exchange::Response(RawResponse::synthetic(url, err));
                }
            };

            let Some(next) = next_attempt(&request, &response) else {
                return Exchange::Response(response);
            };
            if request.attempt >= limit {
                tracing::debug!(%url, limit, "redirect not followed, limit reached");
                return Exchange::Response(response);
            }

            tracing::debug!(from = %url, to = %next.url, attempt = next.attempt, "following redirect");
            request = next;
        }
    }

    /// Load the authenticator once for this attempt and let it annotate the request
    fn authenticate(&self, request: &mut PreparedRequest) -> Result<()> {
        let Some(authenticator) = self.options.authenticator.load() else {
            return Ok(());
        };
        tracing::trace!(
            authenticator = authenticator.name(),
            attempt = request.attempt,
            "authenticating"
        );
        authenticator
            .authenticate(&self.options, request)
            .map_err(|err| {
                tracing::debug!(authenticator = authenticator.name(), error = %err, "authenticator failed");
                if err.is_authentication() {
                    err
                } else {
                    error::authentication(err)
                }
            })
    }

    /// Classify once, deserialize a completed body and apply the error policy
    fn complete<T: DeserializeOwned>(&self, raw: RawResponse) -> Result<RestResponse<T>> {
        let status = self.options.classify(&raw);
        tracing::trace!(url = %raw.url, code = ?raw.status, %status, "classified response");

        let mut response = RestResponse::from_raw(raw, status);

        if status == ResponseStatus::Error && response.error.is_none() {
            if let (Some(code), Some(url)) = (response.status_code, response.url.clone()) {
                response.error = Some(error::status(code, url));
            }
        }

        if status == ResponseStatus::Completed && !response.raw_body.is_empty() {
            match serde_json::from_slice::<T>(&response.raw_body) {
                Ok(data) => response.data = Some(data),
                Err(e) => {
                    let mut err = error::deserialization(e);
                    if let Some(url) = &response.url {
                        err = err.with_url(url.clone());
                    }
                    match self.options.error_policy.on_deserialization_failure() {
                        DeserializationAction::Raise => {
                            tracing::debug!(error = %err, "raising deserialization failure");
                            return Err(err);
                        }
                        DeserializationAction::MarkFailed => {
                            // Only the two deserialization switches decide this case
                            tracing::debug!(error = %err, "marking response failed");
                            response.status = ResponseStatus::Error;
                            response.error = Some(err);
                            return Ok(response);
                        }
                        DeserializationAction::KeepRaw => {
                            tracing::debug!(error = %err, "keeping raw body");
                        }
                    }
                }
            }
        }

        self.surface(response)
    }

    /// Raise or capture the failure a response carries
    fn surface<T>(&self, mut response: RestResponse<T>) -> Result<RestResponse<T>> {
        if response.error.is_none() {
            return Ok(response);
        }

        match self.options.error_policy.on_failure() {
            FailureAction::Raise => match response.error.take() {
                Some(err) => {
                    tracing::debug!(status = %response.status, error = %err, "raising failure");
                    Err(err)
                }
                None => Ok(response),
            },
            FailureAction::Capture => {
                if let Some(err) = &response.error {
                    tracing::debug!(status = %response.status, error = %err, "capturing failure");
                }
                Ok(response)
            }
        }
    }
}
