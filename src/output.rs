//! Output rendering abstraction for model-scout.
//!
//! Defines the [`Renderer`] trait that decouples the discovery run from the
//! display layer. [`StdoutRenderer`] prints colored progress to the terminal;
//! tests plug in a recording renderer instead.

use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

use crate::catalog::{Catalog, ProviderSpec};
use crate::format;
use crate::probe::ProbeResult;
use crate::report::{DiscoveryReport, ProviderRun};

const RULE_WIDTH: usize = 80;

/// Receives progress events from a discovery run.
pub trait Renderer {
    /// Called once before any provider is probed.
    fn run_started(&mut self, timestamp: &str, providers: &[&ProviderSpec]);

    /// Called when a provider's turn begins.
    fn provider_started(&mut self, spec: &ProviderSpec);

    /// Called instead of any probe events when the credential is missing.
    fn provider_skipped(&mut self, spec: &ProviderSpec);

    /// Called once the credential is found, before the first probe.
    fn credential_found(&mut self, masked: &str, candidates: usize);

    /// Called just before a probe is sent.
    fn probe_started(&mut self, index: usize, total: usize, model: &str);

    /// Called with each probe's outcome.
    fn probe_finished(&mut self, result: &ProbeResult);

    /// Called after the provider's last probe.
    fn provider_finished(&mut self, spec: &ProviderSpec, run: &ProviderRun);

    /// Called after the report file is written.
    fn report_saved(&mut self, path: &Path);

    /// Called last, with the whole report.
    fn summary(&mut self, report: &DiscoveryReport, catalog: &Catalog);
}

/// Renders run progress directly to stdout.
///
/// The progress line for a probe is printed without a newline and flushed,
/// so the outcome lands on the same line once the response arrives.
pub struct StdoutRenderer;

impl StdoutRenderer {
    pub fn new() -> Self {
        Self
    }

    fn rule() -> String {
        "=".repeat(RULE_WIDTH)
    }

    fn print_valid_list(display_name: &str, run: &ProviderRun) {
        if run.valid_models.is_empty() {
            return;
        }
        println!();
        println!(
            "{}",
            format!("✅ VALID MODELS FOR {}:", display_name.to_uppercase())
                .green()
                .bold()
        );
        println!("{}", "-".repeat(RULE_WIDTH).dimmed());
        for result in &run.valid_models {
            println!("{}", format::format_valid_entry(result));
        }
    }
}

impl Renderer for StdoutRenderer {
    fn run_started(&mut self, timestamp: &str, providers: &[&ProviderSpec]) {
        println!("{}", Self::rule());
        println!("{}", "Multi-Provider Model Names Discovery".bold().cyan());
        println!("{}", Self::rule());
        println!("{} {}", "Timestamp:".dimmed(), timestamp);
        println!();
        let ids: Vec<&str> = providers.iter().map(|spec| spec.id()).collect();
        println!("Testing providers: {}", ids.join(", ").yellow());
    }

    fn provider_started(&mut self, spec: &ProviderSpec) {
        println!();
        println!("{}", Self::rule());
        println!("Testing {}", spec.display_name().bold());
        println!("{}", Self::rule());
    }

    fn provider_skipped(&mut self, spec: &ProviderSpec) {
        println!(
            "{}",
            format!("⚠️  Skipping: {} not set", spec.api_key_env).yellow()
        );
    }

    fn credential_found(&mut self, masked: &str, candidates: usize) {
        println!("✅ API key found: {}", masked.dimmed());
        println!("Testing {candidates} model candidates...");
        println!();
    }

    fn probe_started(&mut self, index: usize, total: usize, model: &str) {
        print!("{} ", format::format_progress(index, total, model));
        io::stdout().flush().ok();
    }

    fn probe_finished(&mut self, result: &ProbeResult) {
        let outcome = format::format_outcome(result);
        if result.valid {
            println!("{}", outcome.green());
        } else {
            println!("{}", outcome.red());
        }
        if let Some(renamed) = format::format_renamed(result) {
            println!("    {}", renamed.cyan());
        }
    }

    fn provider_finished(&mut self, spec: &ProviderSpec, run: &ProviderRun) {
        println!();
        println!("{}", Self::rule());
        println!("{}", format::format_tally(run));
        Self::print_valid_list(spec.display_name(), run);
    }

    fn report_saved(&mut self, path: &Path) {
        println!();
        println!("📁 Full results saved to: {}", path.display().to_string().bold());
    }

    fn summary(&mut self, report: &DiscoveryReport, catalog: &Catalog) {
        println!();
        println!("{}", Self::rule());
        println!("{}", "SUMMARY".bold());
        println!("{}", Self::rule());
        for run in &report.results {
            let name = catalog.display_name(&run.provider);
            let line = format::format_summary_line(name, run);
            if run.skipped {
                println!("{}", line.yellow());
            } else {
                println!("{}", line.green());
                for result in &run.valid_models {
                    println!("{}", format::format_valid_entry(result).dimmed());
                }
            }
        }
        println!();
    }
}
