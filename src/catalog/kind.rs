//! Provider kind enumeration and per-provider defaults.
//!
//! Defines [`ProviderKind`], the closed set of providers model-scout knows
//! how to probe, along with the static facts each one needs: credential
//! variable, endpoint, response shape, and candidate list.

use std::fmt;
use std::str::FromStr;

use super::spec::ResponseShape;
use super::CatalogError;
use crate::models;

/// Identifies which provider a spec or result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// OpenAI chat completions.
    OpenAI,
    /// Anthropic messages API.
    Claude,
    /// Mistral AI chat completions.
    Mistral,
    /// DeepSeek chat completions.
    DeepSeek,
}

impl ProviderKind {
    /// Every registered provider, in the order runs and reports list them.
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::OpenAI,
        ProviderKind::Claude,
        ProviderKind::Mistral,
        ProviderKind::DeepSeek,
    ];

    /// Short identifier used on the command line, in config, and in reports.
    pub fn id(self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::Claude => "claude",
            ProviderKind::Mistral => "mistral",
            ProviderKind::DeepSeek => "deepseek",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "OpenAI",
            ProviderKind::Claude => "Anthropic (Claude)",
            ProviderKind::Mistral => "Mistral AI",
            ProviderKind::DeepSeek => "DeepSeek",
        }
    }

    /// Environment variable holding the API key.
    pub fn api_key_env(self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "OPENAI_API_KEY",
            ProviderKind::Claude => "CLAUDE_API_KEY",
            ProviderKind::Mistral => "MISTRAL_API_KEY",
            ProviderKind::DeepSeek => "DEEPSEEK_API_KEY",
        }
    }

    pub fn default_endpoint(self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "https://api.openai.com/v1/chat/completions",
            ProviderKind::Claude => "https://api.anthropic.com/v1/messages",
            ProviderKind::Mistral => "https://api.mistral.ai/v1/chat/completions",
            ProviderKind::DeepSeek => "https://api.deepseek.com/v1/chat/completions",
        }
    }

    /// Where the generated text lives in a successful response.
    pub fn response_shape(self) -> ResponseShape {
        match self {
            ProviderKind::Claude => ResponseShape::ContentBlocks,
            ProviderKind::OpenAI | ProviderKind::Mistral | ProviderKind::DeepSeek => {
                ResponseShape::ChatChoices
            }
        }
    }

    /// Whether a 400 complaining about `temperature`/`max_tokens` should be
    /// retried once with reasoning-model parameters.
    ///
    /// Only OpenAI hosts the o-series/GPT-5 models that reject the standard
    /// sampling parameters.
    pub fn supports_alternate_params(self) -> bool {
        matches!(self, ProviderKind::OpenAI)
    }

    /// Built-in candidate model names.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            ProviderKind::OpenAI => models::OPENAI_CANDIDATES,
            ProviderKind::Claude => models::CLAUDE_CANDIDATES,
            ProviderKind::Mistral => models::MISTRAL_CANDIDATES,
            ProviderKind::DeepSeek => models::DEEPSEEK_CANDIDATES,
        }
    }
}

impl FromStr for ProviderKind {
    type Err = CatalogError;

    /// Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAI),
            "claude" => Ok(ProviderKind::Claude),
            "mistral" => Ok(ProviderKind::Mistral),
            "deepseek" => Ok(ProviderKind::DeepSeek),
            _ => Err(CatalogError::UnknownProvider(s.to_string())),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trips_ids() {
        for kind in ProviderKind::ALL {
            assert_eq!(kind.id().parse::<ProviderKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("OpenAI".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAI);
        assert_eq!("DEEPSEEK".parse::<ProviderKind>().unwrap(), ProviderKind::DeepSeek);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "gemini".parse::<ProviderKind>().unwrap_err();
        assert!(err.to_string().contains("gemini"));
    }

    #[test]
    fn test_only_openai_retries_with_alternate_params() {
        let retrying: Vec<_> = ProviderKind::ALL
            .into_iter()
            .filter(|k| k.supports_alternate_params())
            .collect();
        assert_eq!(retrying, vec![ProviderKind::OpenAI]);
    }

    #[test]
    fn test_claude_uses_content_blocks() {
        assert_eq!(ProviderKind::Claude.response_shape(), ResponseShape::ContentBlocks);
        assert_eq!(ProviderKind::Mistral.response_shape(), ResponseShape::ChatChoices);
    }

    #[test]
    fn test_every_provider_has_candidates() {
        for kind in ProviderKind::ALL {
            assert!(!kind.candidates().is_empty(), "{kind} has no candidates");
        }
    }
}
