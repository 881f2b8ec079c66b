//! Command-line interface definition and dispatch for model-scout.
//!
//! Uses [`clap`] for argument parsing with derive macros. The only
//! positional argument picks a provider; everything else tunes the run.

mod list;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, ProviderSpec};
use crate::config::Config;
use crate::credentials::EnvCredentials;
use crate::output::{Renderer, StdoutRenderer};
use crate::probe::Prober;
use crate::report::DiscoveryReport;
use crate::runner;

/// Literal that selects every registered provider.
const ALL_PROVIDERS: &str = "all";

/// Top-level CLI structure for model-scout.
#[derive(Parser, Debug)]
#[command(
    name = "model-scout",
    version,
    about = "Discover which model names LLM providers currently accept"
)]
pub struct Cli {
    /// Provider to test (openai, claude, mistral, deepseek) or "all"
    pub provider: Option<String>,
    /// Per-request timeout in seconds (overrides config)
    #[arg(short, long)]
    pub timeout: Option<u64>,
    /// Pause between probes in milliseconds (overrides config)
    #[arg(long)]
    pub delay_ms: Option<u64>,
    /// Directory for the JSON report (overrides config)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// List providers and candidate models without probing
    #[arg(long)]
    pub list: bool,
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Picks the providers to run from the positional argument.
///
/// Absent, `all`, or unrecognised arguments select every provider.
pub fn select_providers<'a>(catalog: &'a Catalog, arg: Option<&str>) -> Vec<&'a ProviderSpec> {
    match arg {
        None => catalog.specs().iter().collect(),
        Some(id) if id.eq_ignore_ascii_case(ALL_PROVIDERS) => catalog.specs().iter().collect(),
        Some(id) => match catalog.get_spec(id) {
            Ok(spec) => vec![spec],
            Err(err) => {
                warn!(
                    "{err}; testing all providers ({})",
                    catalog.list_providers().join(", ")
                );
                catalog.specs().iter().collect()
            }
        },
    }
}

/// Runs discovery end to end: probe, persist, summarize.
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let catalog = Catalog::from_config(&config);

    if cli.list {
        list::print_catalog(&catalog);
        return Ok(());
    }

    let timeout = cli
        .timeout
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.timeout());
    let pacing = cli
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.delay());
    let output_dir = cli.output_dir.unwrap_or_else(|| config.output_dir());

    let selected = select_providers(&catalog, cli.provider.as_deref());
    let prober = Prober::new(timeout)?;
    debug!(timeout = ?prober.timeout(), ?pacing, output_dir = %output_dir.display(), "starting run");
    let mut renderer = StdoutRenderer::new();

    renderer.run_started(&chrono::Local::now().to_rfc3339(), &selected);
    let runs = runner::run_all(&prober, &selected, &EnvCredentials, pacing, &mut renderer).await;

    let report = DiscoveryReport::new(runs);
    let path = report.write_to(&output_dir)?;
    info!(path = %path.display(), "report written");

    renderer.report_saved(&path);
    renderer.summary(&report, &catalog);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(specs: &[&ProviderSpec]) -> Vec<&'static str> {
        specs.iter().map(|spec| spec.id()).collect()
    }

    #[test]
    fn test_no_argument_selects_all() {
        let catalog = Catalog::builtin();
        assert_eq!(
            ids(&select_providers(&catalog, None)),
            vec!["openai", "claude", "mistral", "deepseek"]
        );
    }

    #[test]
    fn test_all_literal_selects_all() {
        let catalog = Catalog::builtin();
        assert_eq!(select_providers(&catalog, Some("all")).len(), 4);
        assert_eq!(select_providers(&catalog, Some("ALL")).len(), 4);
    }

    #[test]
    fn test_single_provider() {
        let catalog = Catalog::builtin();
        assert_eq!(ids(&select_providers(&catalog, Some("mistral"))), vec!["mistral"]);
    }

    #[test]
    fn test_unknown_provider_falls_back_to_all() {
        let catalog = Catalog::builtin();
        assert_eq!(select_providers(&catalog, Some("gemini")).len(), 4);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "model-scout",
            "openai",
            "--timeout",
            "30",
            "--delay-ms",
            "0",
            "-o",
            "out",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.provider.as_deref(), Some("openai"));
        assert_eq!(cli.timeout, Some(30));
        assert_eq!(cli.delay_ms, Some(0));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert!(cli.verbose);
        assert!(!cli.list);
    }

    #[test]
    fn test_parse_without_arguments() {
        let cli = Cli::try_parse_from(["model-scout"]).unwrap();
        assert!(cli.provider.is_none());
        assert!(cli.timeout.is_none());
    }
}
