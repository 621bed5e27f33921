//! Endpoint client: outbound HTTP and outcome classification.
//!
//! # Responsibilities
//! - Build request URLs from the configured base URL
//! - Issue GET requests with JSON headers
//! - Classify each response into exactly one outcome
//!
//! The client performs no rendering; display updates are the caller's
//! concern (see [`crate::display`]).

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use url::Url;

use crate::config::BackendConfig;
use crate::probe::endpoints::Endpoint;
use crate::probe::outcome::{describe_transport_error, ProbeError};

/// Calls slower than this are logged at `warn`.
const SLOW_CALL: Duration = Duration::from_secs(5);

/// HTTP client bound to one backend base URL.
#[derive(Debug)]
pub struct EndpointClient {
    http: reqwest::Client,
    base_url: String,
}

impl EndpointClient {
    /// Build a client from backend configuration.
    ///
    /// The per-request deadline comes from `request_timeout_secs`; a value
    /// of 0 disables it, restoring the original unbounded behavior.
    pub fn new(config: &BackendConfig) -> Result<Self, ProbeError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| ProbeError::Config(format!("invalid base URL '{}': {}", base_url, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }
        let http = builder
            .build()
            .map_err(|e| ProbeError::Config(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// The backend base URL this client talks to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe one endpoint and classify the outcome.
    ///
    /// Resolves exactly once: 2xx with a JSON body is `Ok`, everything else
    /// is one of the [`ProbeError`] kinds. No retry.
    pub async fn call(&self, endpoint: Endpoint) -> Result<Value, ProbeError> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let started = Instant::now();
        tracing::debug!(endpoint = %endpoint, url = %url, "issuing probe");

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::error!(endpoint = %endpoint, url = %url, error = %e, "probe transport failure");
            ProbeError::Network {
                message: describe_transport_error(&e),
            }
        })?;

        let status = response.status();
        let status_text = status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string();

        // Body is read best effort on error statuses; on success a read
        // failure is itself a transport failure.
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if status.is_success() => {
                return Err(ProbeError::Network {
                    message: describe_transport_error(&e),
                });
            }
            Err(_) => String::new(),
        };

        self.log_timing(endpoint, status.as_u16(), started.elapsed());

        if status.is_success() {
            let value: Value = serde_json::from_str(&body)?;
            Ok(value)
        } else {
            Err(ProbeError::Http {
                status: status.as_u16(),
                status_text,
                body: (!body.is_empty()).then_some(body),
            })
        }
    }

    /// One-shot reachability check against the backend base URL.
    ///
    /// Any HTTP response, including an error status, proves the host is
    /// reachable; only transport failures are reported.
    pub async fn connectivity_check(&self) -> Result<(), ProbeError> {
        self.http
            .head(&self.base_url)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| ProbeError::Network {
                message: describe_transport_error(&e),
            })
    }

    fn log_timing(&self, endpoint: Endpoint, status: u16, elapsed: Duration) {
        if elapsed > SLOW_CALL {
            tracing::warn!(
                endpoint = %endpoint,
                status,
                elapsed_ms = elapsed.as_millis() as u64,
                "slow backend response"
            );
        } else {
            tracing::debug!(
                endpoint = %endpoint,
                status,
                elapsed_ms = elapsed.as_millis() as u64,
                "probe completed"
            );
        }
    }
}
