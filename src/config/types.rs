//! Struct definitions for model-scout configuration.

use serde::{Deserialize, Serialize};

use crate::catalog::ProviderKind;

/// Root configuration, deserialized from `config.toml` / `model-scout.toml`.
///
/// Every field is optional so a missing or partial file falls back to the
/// built-in defaults.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Per-request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Pause between probes in milliseconds.
    #[serde(default)]
    pub delay_ms: Option<u64>,
    /// Directory where discovery reports are written.
    #[serde(default)]
    pub output_dir: Option<String>,
    /// Per-provider overrides.
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Provider-specific override tables, one per registered provider.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ProviderConfig {
    pub openai: Option<ProviderEntry>,
    pub claude: Option<ProviderEntry>,
    pub mistral: Option<ProviderEntry>,
    pub deepseek: Option<ProviderEntry>,
}

impl ProviderConfig {
    pub fn entry(&self, kind: ProviderKind) -> Option<&ProviderEntry> {
        match kind {
            ProviderKind::OpenAI => self.openai.as_ref(),
            ProviderKind::Claude => self.claude.as_ref(),
            ProviderKind::Mistral => self.mistral.as_ref(),
            ProviderKind::DeepSeek => self.deepseek.as_ref(),
        }
    }

    pub(super) fn entries_mut(&mut self) -> [&mut Option<ProviderEntry>; 4] {
        [
            &mut self.openai,
            &mut self.claude,
            &mut self.mistral,
            &mut self.deepseek,
        ]
    }
}

/// Overrides for a single provider.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ProviderEntry {
    /// Replacement endpoint URL (proxies, gateways, self-hosted mirrors).
    pub endpoint: Option<String>,
    /// Replacement credential environment variable.
    pub api_key_env: Option<String>,
    /// Replaces the built-in candidate list entirely.
    pub models: Option<Vec<String>>,
    /// Appended to the candidate list.
    #[serde(default)]
    pub extra_models: Vec<String>,
}
