//! Centralized constants for model-scout.
//!
//! All magic numbers, default strings, and configuration constants live here
//! so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "model-scout";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Per-project configuration filename.
pub const PROJECT_CONFIG_FILENAME: &str = "model-scout.toml";

// --- Probing ---

/// Prompt sent with every probe. Kept tiny so probes cost next to nothing.
pub const PROBE_PROMPT: &str = "Say 'OK' if you can respond.";

/// `max_tokens` value for the standard probe body.
pub const PROBE_MAX_TOKENS: u64 = 10;

/// `max_completion_tokens` value for the reasoning-model retry body.
/// Reasoning models spend tokens before answering, so this is larger.
pub const REASONING_MAX_COMPLETION_TOKENS: u64 = 100;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Default pause between two probes of the same provider, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Maximum number of characters kept from a successful response.
pub const PREVIEW_MAX_CHARS: usize = 50;

/// API version header value required by Anthropic.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

// --- Reporting ---

/// Directory (relative to the working directory) where reports are written.
pub const DEFAULT_OUTPUT_DIR: &str = "logs";

/// Filename prefix for persisted reports.
pub const REPORT_FILE_PREFIX: &str = "model_discovery_";

/// `strftime` pattern for the report filename timestamp.
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// --- Logging ---

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "model_scout=warn";

/// Tracing filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "model_scout=debug";
