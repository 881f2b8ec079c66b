//! Provider specs: the data record a probe is built from.
//!
//! A [`ProviderSpec`] carries everything provider-specific as plain data plus
//! two pure functions (credential → auth headers, model → request body), so
//! the prober itself never branches on which provider it is talking to.

use std::fmt;

use serde_json::{json, Value};

use super::kind::ProviderKind;
use crate::constants::{
    ANTHROPIC_VERSION, PROBE_MAX_TOKENS, PROBE_PROMPT, REASONING_MAX_COMPLETION_TOKENS,
};

/// Builds auth header `(name, value)` pairs from a credential.
pub type AuthHeadersFn = fn(&str) -> Vec<(&'static str, String)>;

/// Builds the JSON request body for a model name.
pub type RequestBodyFn = fn(&str) -> Value;

/// Where a provider puts the generated text in a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `content[0].text` (Anthropic messages API).
    ContentBlocks,
    /// `choices[0].message.content` (OpenAI-compatible chat completions).
    ChatChoices,
}

/// Immutable description of how to probe one provider.
#[derive(Clone)]
pub struct ProviderSpec {
    pub kind: ProviderKind,
    pub endpoint: String,
    /// Environment variable the credential is read from.
    pub api_key_env: String,
    /// Candidate model names, probed in this order.
    pub models: Vec<String>,
    pub auth_headers: AuthHeadersFn,
    pub request_body: RequestBodyFn,
    pub response_shape: ResponseShape,
    /// Retry a qualifying 400 once with reasoning-model parameters.
    pub alternate_params_retry: bool,
}

impl ProviderSpec {
    /// Builds the built-in spec for a provider.
    pub fn for_kind(kind: ProviderKind) -> Self {
        let (auth_headers, request_body): (AuthHeadersFn, RequestBodyFn) = match kind {
            ProviderKind::OpenAI => (bearer_auth, sampled_chat_body),
            ProviderKind::Claude => (anthropic_auth, chat_body),
            ProviderKind::Mistral | ProviderKind::DeepSeek => (bearer_auth, chat_body),
        };

        Self {
            kind,
            endpoint: kind.default_endpoint().to_string(),
            api_key_env: kind.api_key_env().to_string(),
            models: kind.candidates().iter().map(|m| m.to_string()).collect(),
            auth_headers,
            request_body,
            response_shape: kind.response_shape(),
            alternate_params_retry: kind.supports_alternate_params(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_api_key_env(mut self, var: impl Into<String>) -> Self {
        self.api_key_env = var.into();
        self
    }

    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models = models.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub fn display_name(&self) -> &'static str {
        self.kind.display_name()
    }

    pub fn auth_header_pairs(&self, credential: &str) -> Vec<(&'static str, String)> {
        (self.auth_headers)(credential)
    }

    pub fn body_for(&self, model: &str) -> Value {
        (self.request_body)(model)
    }
}

impl fmt::Debug for ProviderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSpec")
            .field("kind", &self.kind)
            .field("endpoint", &self.endpoint)
            .field("api_key_env", &self.api_key_env)
            .field("models", &self.models.len())
            .field("response_shape", &self.response_shape)
            .field("alternate_params_retry", &self.alternate_params_retry)
            .finish_non_exhaustive()
    }
}

/// Rewrites a standard body into the shape reasoning models accept:
/// `max_tokens` becomes `max_completion_tokens` and `temperature` is dropped.
pub fn alternate_params_body(mut body: Value) -> Value {
    if let Some(fields) = body.as_object_mut() {
        fields.remove("max_tokens");
        fields.remove("temperature");
        fields.insert(
            "max_completion_tokens".to_string(),
            json!(REASONING_MAX_COMPLETION_TOKENS),
        );
    }
    body
}

fn bearer_auth(credential: &str) -> Vec<(&'static str, String)> {
    vec![("authorization", format!("Bearer {credential}"))]
}

fn anthropic_auth(credential: &str) -> Vec<(&'static str, String)> {
    vec![
        ("x-api-key", credential.to_string()),
        ("anthropic-version", ANTHROPIC_VERSION.to_string()),
    ]
}

fn chat_body(model: &str) -> Value {
    json!({
        "model": model,
        "messages": [{ "role": "user", "content": PROBE_PROMPT }],
        "max_tokens": PROBE_MAX_TOKENS,
    })
}

/// Chat body with deterministic sampling, which older OpenAI models accept
/// and reasoning models reject.
fn sampled_chat_body(model: &str) -> Value {
    let mut body = chat_body(model);
    body["temperature"] = json!(0.0);
    body
}
