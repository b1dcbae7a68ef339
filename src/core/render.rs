use chrono::{DateTime, Local};

use crate::core::model::Pass;

/// Render one pass as the user-facing line.
///
/// `risetime` is Unix epoch seconds, shown in the local timezone. Epochs
/// chrono cannot represent fall back to the raw value.
pub fn format_pass(pass: &Pass) -> String {
    let datetime = DateTime::from_timestamp(pass.risetime, 0)
        .map(|utc| utc.with_timezone(&Local).to_string())
        .unwrap_or_else(|| format!("epoch {}", pass.risetime));

    format!("Next pass at {} for {} seconds!", datetime, pass.duration)
}

/// One line per pass, same order as received.
pub fn render_passes(passes: &[Pass]) -> Vec<String> {
    passes.iter().map(format_pass).collect()
}
