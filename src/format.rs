//! Plain-text formatting for progress and summary lines.
//!
//! Colors are applied by the renderer; these helpers only decide the words.

use crate::probe::ProbeResult;
use crate::report::ProviderRun;

/// Width the model column is padded to on progress lines.
const MODEL_COLUMN_WIDTH: usize = 45;

/// `[3/24] gpt-4o-mini                                  `
pub fn format_progress(index: usize, total: usize, model: &str) -> String {
    format!("[{index}/{total}] {model:<width$}", width = MODEL_COLUMN_WIDTH)
}

/// `✅ VALID` or `❌ <error>`.
pub fn format_outcome(result: &ProbeResult) -> String {
    if result.valid {
        "✅ VALID".to_string()
    } else {
        format!("❌ {}", result.error.as_deref().unwrap_or("unknown error"))
    }
}

/// `→ API returned: <name>` when the provider echoed a different model name.
pub fn format_renamed(result: &ProbeResult) -> Option<String> {
    result
        .renamed_to()
        .map(|returned| format!("→ API returned: {returned}"))
}

/// `✅ Valid: 3 | ❌ Invalid: 21`
pub fn format_tally(run: &ProviderRun) -> String {
    format!("✅ Valid: {} | ❌ Invalid: {}", run.valid, run.invalid)
}

/// One summary line per provider.
pub fn format_summary_line(display_name: &str, run: &ProviderRun) -> String {
    if run.skipped {
        format!("⚠️  {display_name}: Skipped (no API key)")
    } else {
        format!("✅ {display_name}: {}/{} valid", run.valid, run.total)
    }
}

/// Bulleted list entry for a valid model, with the returned name when it differs.
pub fn format_valid_entry(result: &ProbeResult) -> String {
    match format_renamed(result) {
        Some(renamed) => format!("  • {}\n    {renamed}", result.model),
        None => format!("  • {}", result.model),
    }
}
