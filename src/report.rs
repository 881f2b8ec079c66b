//! Discovery report aggregation and persistence.
//!
//! Each run is written as one pretty-printed JSON file named
//! `model_discovery_<YYYYMMDD_HHMMSS>.json` under the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize, Serializer};

use crate::constants::{REPORT_FILE_PREFIX, REPORT_TIMESTAMP_FORMAT};
use crate::probe::ProbeResult;

/// All probe results for one provider.
///
/// Either skipped (no credential, no results) or fully populated with one
/// result per candidate model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRun {
    pub provider: String,
    pub skipped: bool,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub results: Vec<ProbeResult>,
    /// Valid subset of `results`, in probe order.
    pub valid_models: Vec<ProbeResult>,
}

impl ProviderRun {
    pub fn skipped(provider: &str) -> Self {
        Self {
            provider: provider.to_string(),
            skipped: true,
            total: 0,
            valid: 0,
            invalid: 0,
            results: Vec::new(),
            valid_models: Vec::new(),
        }
    }

    pub fn completed(provider: &str, results: Vec<ProbeResult>) -> Self {
        let valid_models: Vec<ProbeResult> = results.iter().filter(|r| r.valid).cloned().collect();
        Self {
            provider: provider.to_string(),
            skipped: false,
            total: results.len(),
            valid: valid_models.len(),
            invalid: results.len() - valid_models.len(),
            results,
            valid_models,
        }
    }
}

/// Top-level record persisted at the end of a run.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryReport {
    /// RFC 3339 local time the report was generated.
    pub timestamp: String,
    /// Provider id → run, in the order providers were requested.
    #[serde(serialize_with = "runs_by_provider")]
    pub results: Vec<ProviderRun>,
    #[serde(skip)]
    generated_at: DateTime<Local>,
}

impl DiscoveryReport {
    pub fn new(results: Vec<ProviderRun>) -> Self {
        let generated_at = Local::now();
        Self {
            timestamp: generated_at.to_rfc3339(),
            results,
            generated_at,
        }
    }

    /// File name this report is written under.
    pub fn file_name(&self) -> String {
        format!(
            "{}{}.json",
            REPORT_FILE_PREFIX,
            self.generated_at.format(REPORT_TIMESTAMP_FORMAT)
        )
    }

    /// Writes the report into `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {:?}", dir))?;
        let path = dir.join(self.file_name());
        let json = serde_json::to_string_pretty(self).context("Failed to serialize report")?;
        fs::write(&path, json).with_context(|| format!("Failed to write report to {:?}", path))?;
        Ok(path)
    }
}

fn runs_by_provider<S: Serializer>(runs: &[ProviderRun], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(runs.iter().map(|run| (run.provider.as_str(), run)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(model: &str, valid: bool) -> ProbeResult {
        ProbeResult {
            provider: "openai".to_string(),
            model: model.to_string(),
            valid,
            status_code: Some(if valid { 200 } else { 404 }),
            error: (!valid).then(|| "model not found".to_string()),
            response_preview: valid.then(|| "OK".to_string()),
            model_returned: None,
        }
    }

    #[test]
    fn test_completed_run_counts_and_order() {
        let run = ProviderRun::completed(
            "openai",
            vec![
                result("gpt-5", true),
                result("gpt-5-turbo", false),
                result("gpt-4o", true),
            ],
        );
        assert!(!run.skipped);
        assert_eq!((run.total, run.valid, run.invalid), (3, 2, 1));
        let names: Vec<_> = run.valid_models.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(names, vec!["gpt-5", "gpt-4o"]);
    }

    #[test]
    fn test_skipped_run_is_empty() {
        let run = ProviderRun::skipped("claude");
        assert!(run.skipped);
        assert!(run.results.is_empty());
        assert_eq!(run.total, 0);
    }

    #[test]
    fn test_file_name_pattern() {
        let report = DiscoveryReport::new(Vec::new());
        let name = report.file_name();
        assert!(name.starts_with("model_discovery_"));
        assert!(name.ends_with(".json"));
        // model_discovery_ + YYYYMMDD_HHMMSS + .json
        assert_eq!(name.len(), "model_discovery_".len() + 15 + ".json".len());
    }

    #[test]
    fn test_write_creates_dir_and_keeps_provider_order() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("nested").join("logs");
        let report = DiscoveryReport::new(vec![
            ProviderRun::skipped("mistral"),
            ProviderRun::completed("openai", vec![result("gpt-4o", true)]),
        ]);

        let path = report.write_to(&out).unwrap();
        assert!(path.exists());
        assert_eq!(path.parent().unwrap(), out);

        let written = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["timestamp"], report.timestamp);
        assert_eq!(value["results"]["mistral"]["skipped"], true);
        assert_eq!(value["results"]["openai"]["valid"], 1);
        assert_eq!(
            value["results"]["openai"]["results"][0]["response_preview"],
            "OK"
        );

        // Requested order survives serialization.
        let mistral_at = written.find("\"mistral\"").unwrap();
        let openai_at = written.find("\"openai\"").unwrap();
        assert!(mistral_at < openai_at);

        let run: ProviderRun =
            serde_json::from_value(value["results"]["openai"].clone()).unwrap();
        assert_eq!(run, report.results[1]);
    }
}
