//! Configuration types and path resolution for model-scout.
//!
//! Settings are optional TOML files: a global one at the platform's XDG
//! config path (e.g. `~/.config/model-scout/config.toml` on Linux) and a
//! per-project `model-scout.toml`. CLI flags override both.

mod loader;
mod paths;
mod resolve;
mod types;

pub use types::Config;
#[cfg(test)]
pub use types::ProviderConfig;
pub use types::ProviderEntry;

use anyhow::Result;
use std::path::Path;

impl Config {
    /// Load config with precedence: project > global > defaults.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_with_global(Self::load_global()?, &cwd)
    }

    fn load_with_global(global: Config, project_start: &Path) -> Result<Self> {
        let mut config = global;
        if let Some(project) = Self::load_project(project_start)? {
            config = Self::merge(config, project);
        }

        config.resolve_substitutions();
        Ok(config)
    }
}
