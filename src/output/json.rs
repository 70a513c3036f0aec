//! JSON output renderer.
//!
//! Outputs `{"suite": .., "policy": .., "groups": [...], "summary": {...}}`.

use crate::models::RunReport;
use crate::output::RunRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl RunRenderer for JsonRenderer {
    fn render(&self, report: &RunReport) -> String {
        let mut output = serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
        output.push('\n');
        output
    }
}
