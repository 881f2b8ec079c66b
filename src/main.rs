//! Entry point for model-scout, a model-name discovery tool for LLM providers.
//!
//! This binary loads environment variables, parses CLI arguments via [`cli`],
//! sets up logging, and runs one discovery pass.

mod catalog;
mod cli;
mod config;
mod constants;
mod credentials;
mod format;
mod models;
mod output;
mod probe;
mod report;
mod runner;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Runs the model-scout CLI.
///
/// Loads `.env` files (silently ignored if absent) so provider keys can live
/// next to the project, then dispatches to [`cli::run`].
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = cli::parse();
    init_logging(cli.verbose);
    cli::run(cli).await
}

/// Structured logs go to stderr so progress output on stdout stays clean.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        constants::VERBOSE_LOG_FILTER
    } else {
        constants::DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
