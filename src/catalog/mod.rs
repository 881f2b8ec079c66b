//! Static provider catalog for model-scout.
//!
//! Holds one [`ProviderSpec`] per registered provider. The catalog is pure
//! data: building it reads configuration overrides but performs no I/O.

mod kind;
mod spec;

pub use kind::ProviderKind;
pub use spec::{alternate_params_body, ProviderSpec, ResponseShape};

use thiserror::Error;

use crate::config::{Config, ProviderEntry};

/// Errors raised when looking up providers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown provider: {0}. Supported: openai, claude, mistral, deepseek")]
    UnknownProvider(String),
}

/// Registry of provider specs, in registration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    specs: Vec<ProviderSpec>,
}

impl Catalog {
    /// The built-in providers with their default endpoints and candidates.
    pub fn builtin() -> Self {
        Self {
            specs: ProviderKind::ALL
                .into_iter()
                .map(ProviderSpec::for_kind)
                .collect(),
        }
    }

    /// Built-in providers with `[provider.<id>]` overrides applied.
    pub fn from_config(config: &Config) -> Self {
        let specs = Self::builtin()
            .specs
            .into_iter()
            .map(|spec| match config.provider.entry(spec.kind) {
                Some(entry) => apply_overrides(spec, entry),
                None => spec,
            })
            .collect();
        Self { specs }
    }

    /// Builds a catalog from explicit specs.
    #[cfg(test)]
    pub fn from_specs(specs: Vec<ProviderSpec>) -> Self {
        Self { specs }
    }

    /// Registered provider ids.
    pub fn list_providers(&self) -> Vec<&'static str> {
        self.specs.iter().map(ProviderSpec::id).collect()
    }

    /// Looks up a provider by id (case-insensitive).
    pub fn get_spec(&self, id: &str) -> Result<&ProviderSpec, CatalogError> {
        let kind: ProviderKind = id.parse()?;
        self.specs
            .iter()
            .find(|spec| spec.kind == kind)
            .ok_or_else(|| CatalogError::UnknownProvider(id.to_string()))
    }

    pub fn specs(&self) -> &[ProviderSpec] {
        &self.specs
    }

    /// Display name for a provider id, falling back to the id itself.
    pub fn display_name<'a>(&self, id: &'a str) -> &'a str {
        match self.get_spec(id) {
            Ok(spec) => spec.display_name(),
            Err(_) => id,
        }
    }
}

fn apply_overrides(mut spec: ProviderSpec, entry: &ProviderEntry) -> ProviderSpec {
    if let Some(endpoint) = entry.endpoint.as_deref().filter(|e| !e.is_empty()) {
        spec = spec.with_endpoint(endpoint);
    }
    if let Some(var) = entry.api_key_env.as_deref().filter(|v| !v.is_empty()) {
        spec = spec.with_api_key_env(var);
    }
    if let Some(models) = &entry.models {
        spec = spec.with_models(models.iter().cloned());
    }
    for extra in &entry.extra_models {
        if !spec.models.contains(extra) {
            spec.models.push(extra.clone());
        }
    }
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;

    #[test]
    fn test_list_providers_in_registration_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.list_providers(),
            vec!["openai", "claude", "mistral", "deepseek"]
        );
    }

    #[test]
    fn test_from_default_config_matches_builtin() {
        let builtin = Catalog::builtin();
        let configured = Catalog::from_config(&Config::default());
        assert_eq!(configured.list_providers(), builtin.list_providers());
        for (a, b) in configured.specs().iter().zip(builtin.specs()) {
            assert_eq!(a.endpoint, b.endpoint);
            assert_eq!(a.api_key_env, b.api_key_env);
            assert_eq!(a.models, b.models);
        }
    }

    #[test]
    fn test_get_spec_known_provider() {
        let catalog = Catalog::builtin();
        let spec = catalog.get_spec("claude").unwrap();
        assert_eq!(spec.api_key_env, "CLAUDE_API_KEY");
        assert_eq!(spec.endpoint, "https://api.anthropic.com/v1/messages");
    }

    #[test]
    fn test_get_spec_unknown_provider() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.get_spec("cohere").unwrap_err(),
            CatalogError::UnknownProvider("cohere".to_string())
        );
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.display_name("mistral"), "Mistral AI");
        assert_eq!(catalog.display_name("nope"), "nope");
    }

    #[test]
    fn test_from_config_replaces_and_extends_models() {
        let config = Config {
            provider: ProviderConfig {
                deepseek: Some(ProviderEntry {
                    endpoint: Some("http://proxy.local/v1/chat/completions".to_string()),
                    api_key_env: Some("DS_KEY".to_string()),
                    models: Some(vec!["deepseek-chat".to_string()]),
                    extra_models: vec!["deepseek-v3".to_string(), "deepseek-chat".to_string()],
                }),
                ..Default::default()
            },
            ..Default::default()
        };

        let catalog = Catalog::from_config(&config);
        let spec = catalog.get_spec("deepseek").unwrap();
        assert_eq!(spec.endpoint, "http://proxy.local/v1/chat/completions");
        assert_eq!(spec.api_key_env, "DS_KEY");
        assert_eq!(spec.models, vec!["deepseek-chat", "deepseek-v3"]);

        // Untouched providers keep their defaults
        let openai = catalog.get_spec("openai").unwrap();
        assert_eq!(openai.models.len(), crate::models::OPENAI_CANDIDATES.len());
    }
}
