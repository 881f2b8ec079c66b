//! Environment variable substitution and effective-value accessors.

use std::path::PathBuf;
use std::time::Duration;

use super::types::Config;

use crate::constants::{DEFAULT_DELAY_MS, DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECS};

impl Config {
    /// Resolve {env:VAR_NAME} patterns in string fields.
    pub(super) fn resolve_substitutions(&mut self) {
        if let Some(ref mut dir) = self.output_dir {
            *dir = Self::resolve_str(dir);
        }
        for entry in self.provider.entries_mut().into_iter().flatten() {
            if let Some(ref mut endpoint) = entry.endpoint {
                *endpoint = Self::resolve_str(endpoint);
            }
        }
    }

    /// Replace {env:VAR} with the environment variable value.
    fn resolve_str(s: &str) -> String {
        let mut result = s.to_string();
        let mut cursor = 0;
        while let Some(offset) = result[cursor..].find("{env:") {
            let start = cursor + offset;
            let Some(end) = result[start..].find('}') else {
                break;
            };
            let var_name = &result[start + 5..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
            // Inserted values are not expanded again.
            cursor = start + value.len();
        }
        result
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Pause between two probes of the same provider.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.unwrap_or(DEFAULT_DELAY_MS))
    }

    /// Directory reports are written to.
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(
            self.output_dir
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(DEFAULT_OUTPUT_DIR),
        )
    }
}
