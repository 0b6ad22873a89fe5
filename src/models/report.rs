//! Analysis Reports
//!
//! The rendering-ready value a pipeline produces: a single block of text, a
//! summary with an expandable detail block, or the structured
//! argumentative-structure result. Reports are request-scoped and replaced
//! wholesale by the next submission.

use serde::Serialize;

use crate::models::structure::StructureReport;
use crate::services::format::structure::render_structure;

/// A rendering-ready analysis result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AnalysisReport {
    /// A single block of text
    Plain { text: String },
    /// A one-line summary plus an expandable detail block
    Detailed { basic: String, details: String },
    /// Structured argumentative-structure result
    Structure(StructureReport),
}

impl AnalysisReport {
    /// Build a plain report.
    pub fn plain(text: impl Into<String>) -> Self {
        AnalysisReport::Plain { text: text.into() }
    }

    /// Build a summary + details report.
    pub fn detailed(basic: impl Into<String>, details: impl Into<String>) -> Self {
        AnalysisReport::Detailed {
            basic: basic.into(),
            details: details.into(),
        }
    }

    /// Render the report as terminal text.
    pub fn render(&self) -> String {
        match self {
            AnalysisReport::Plain { text } => text.clone(),
            AnalysisReport::Detailed { basic, details } => {
                if details.is_empty() {
                    basic.clone()
                } else {
                    format!("{}\n\n{}", basic, details)
                }
            }
            AnalysisReport::Structure(report) => render_structure(report),
        }
    }
}
