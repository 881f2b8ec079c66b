//! Single-model probing.
//!
//! A probe sends one minimal completion request for a candidate model name
//! and records whether the provider accepted it. Every failure mode, from a
//! missing key to a dropped connection, is folded into the returned
//! [`ProbeResult`]; [`Prober::probe`] never fails.

pub mod classify;
mod error;

pub use error::ProbeError;

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::{alternate_params_body, ProviderSpec};
use crate::credentials::CredentialSource;
use classify::Verdict;

/// Outcome of probing one model name against one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub provider: String,
    pub model: String,
    pub valid: bool,
    /// Final HTTP status, after the alternate-parameter retry if one was sent.
    pub status_code: Option<u16>,
    pub error: Option<String>,
    pub response_preview: Option<String>,
    /// Model name the provider echoed back, which may be a dated snapshot.
    pub model_returned: Option<String>,
}

impl ProbeResult {
    fn new(provider: &str, model: &str) -> Self {
        Self {
            provider: provider.to_string(),
            model: model.to_string(),
            valid: false,
            status_code: None,
            error: None,
            response_preview: None,
            model_returned: None,
        }
    }

    /// The provider-reported model name, when it differs from the one asked for.
    pub fn renamed_to(&self) -> Option<&str> {
        self.model_returned
            .as_deref()
            .filter(|returned| *returned != self.model)
    }
}

/// Raw status and body of the final response.
struct Exchange {
    status: u16,
    body: String,
}

/// Sends probes with a shared HTTP client and a fixed timeout.
pub struct Prober {
    client: reqwest::Client,
    timeout: Duration,
}

impl Prober {
    /// Creates a prober whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (e.g. the
    /// TLS backend fails to initialize).
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("model-scout/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Probes `model` against the provider described by `spec`.
    ///
    /// Validity is true exactly when the final response status is 200.
    pub async fn probe(
        &self,
        spec: &ProviderSpec,
        model: &str,
        credentials: &dyn CredentialSource,
    ) -> ProbeResult {
        let mut result = ProbeResult::new(spec.id(), model);

        let Some(credential) = credentials.credential(&spec.api_key_env) else {
            result.error = Some(ProbeError::CredentialMissing.to_string());
            return result;
        };

        let exchange = match self.exchange(spec, model, &credential).await {
            Ok(exchange) => exchange,
            Err(err) => {
                warn!(provider = spec.id(), model, error = %err, "probe failed");
                result.error = Some(err.to_string());
                return result;
            }
        };

        result.status_code = Some(exchange.status);
        match classify::classify(exchange.status, &exchange.body, spec.response_shape) {
            Verdict::Accepted {
                preview,
                model_returned,
            } => {
                result.valid = true;
                result.response_preview = preview;
                result.model_returned = model_returned;
            }
            Verdict::Rejected { error } => result.error = Some(error),
        }
        result
    }

    /// Sends the probe request, plus at most one alternate-parameter retry.
    async fn exchange(
        &self,
        spec: &ProviderSpec,
        model: &str,
        credential: &str,
    ) -> Result<Exchange, ProbeError> {
        let headers = build_headers(spec, credential)?;
        let body = spec.body_for(model);

        let first = self.send(spec, &headers, &body).await?;
        if first.status != 400 || !spec.alternate_params_retry {
            return Ok(first);
        }

        match classify::error_message(&first.body) {
            Some(message) if classify::needs_alternate_params(&message) => {
                debug!(
                    provider = spec.id(),
                    model, "retrying with reasoning-model parameters"
                );
                self.send(spec, &headers, &alternate_params_body(body)).await
            }
            _ => Ok(first),
        }
    }

    async fn send(
        &self,
        spec: &ProviderSpec,
        headers: &HeaderMap,
        body: &Value,
    ) -> Result<Exchange, ProbeError> {
        debug!(endpoint = %spec.endpoint, model = %body["model"], "POST");
        let response = self
            .client
            .post(&spec.endpoint)
            .headers(headers.clone())
            .json(body)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, "response received");
        Ok(Exchange { status, body })
    }
}

/// `Content-Type: application/json` merged with the provider's auth headers.
fn build_headers(spec: &ProviderSpec, credential: &str) -> Result<HeaderMap, ProbeError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in spec.auth_header_pairs(credential) {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ProbeError::Unexpected(format!("invalid header name {name}: {e}")))?;
        let mut value = HeaderValue::from_str(&value).map_err(|_| {
            ProbeError::Unexpected(format!("credential is not a valid {name} header value"))
        })?;
        value.set_sensitive(true);
        headers.insert(name, value);
    }
    Ok(headers)
}
