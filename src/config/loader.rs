//! File loading and merging for model-scout configuration.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::{Config, ProviderConfig, ProviderEntry};

impl Config {
    /// Loads the global config from `~/.config/model-scout/config.toml`.
    ///
    /// A missing file (or an undeterminable config directory) yields the
    /// defaults; nothing is written to disk.
    pub(super) fn load_global() -> Result<Self> {
        match Self::config_path() {
            Ok(path) if path.exists() => Self::load_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Looks for `model-scout.toml` starting at `start`, walking up to the
    /// git root.
    pub(super) fn load_project(start: &Path) -> Result<Option<Config>> {
        match Self::find_project_file(start) {
            Some(path) => Self::load_file(&path).map(Some),
            None => Ok(None),
        }
    }

    pub(super) fn find_project_file(start: &Path) -> Option<PathBuf> {
        let mut dir = start.to_path_buf();
        loop {
            let candidate = dir.join(crate::constants::PROJECT_CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            // Stop at git root or filesystem root
            if dir.join(".git").exists() || !dir.pop() {
                return None;
            }
        }
    }

    pub(super) fn load_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {:?}", path))?;
        Ok(config)
    }

    /// Merge project config over global config.
    /// Project values win when present.
    pub(super) fn merge(global: Config, project: Config) -> Config {
        Config {
            timeout_secs: project.timeout_secs.or(global.timeout_secs),
            delay_ms: project.delay_ms.or(global.delay_ms),
            output_dir: project.output_dir.or(global.output_dir),
            provider: ProviderConfig {
                openai: merge_entry(global.provider.openai, project.provider.openai),
                claude: merge_entry(global.provider.claude, project.provider.claude),
                mistral: merge_entry(global.provider.mistral, project.provider.mistral),
                deepseek: merge_entry(global.provider.deepseek, project.provider.deepseek),
            },
        }
    }
}

fn merge_entry(
    global: Option<ProviderEntry>,
    project: Option<ProviderEntry>,
) -> Option<ProviderEntry> {
    match (global, project) {
        (Some(global), Some(project)) => Some(ProviderEntry {
            endpoint: project.endpoint.or(global.endpoint),
            api_key_env: project.api_key_env.or(global.api_key_env),
            models: project.models.or(global.models),
            extra_models: if project.extra_models.is_empty() {
                global.extra_models
            } else {
                project.extra_models
            },
        }),
        (global, project) => project.or(global),
    }
}
