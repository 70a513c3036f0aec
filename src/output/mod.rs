//! Run report renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::models::RunReport;

/// Trait for rendering a finished run to an output format.
pub trait RunRenderer {
    /// Render the report to a string.
    fn render(&self, report: &RunReport) -> String;
}

/// Output format options.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render the report using the renderer for this format.
    pub fn render(&self, report: &RunReport) -> String {
        match self {
            OutputFormat::Terminal => terminal::TerminalRenderer.render(report),
            OutputFormat::Json => json::JsonRenderer.render(report),
        }
    }
}

/// Force ANSI styling on or off for the rest of the process.
///
/// The decision is made in [`Config`](crate::config::Config), where
/// `NO_COLOR` and `CALCKIT_COLOR` are already resolved, so `colored`'s own
/// TTY and environment detection is overridden either way.
pub fn apply_color(enabled: bool) {
    colored::control::set_override(enabled);
}
