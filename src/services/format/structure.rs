//! Argumentative-Structure Formatter
//!
//! Renders the structured report: two parallel argument breakdowns plus the
//! three-way similarity block. Missing breakdown fields render as "-";
//! attempted-but-failed similarity scores render as "N/A"; similarity rows
//! whose comparison was never applicable are omitted.

use crate::models::structure::{ArgumentBreakdown, SimilarityCell, StructureReport};

/// Placeholder for a breakdown field whose sub-call failed or found nothing.
pub const MISSING_FIELD: &str = "-";

/// Placeholder for an attempted similarity comparison that failed.
pub const UNAVAILABLE_SCORE: &str = "N/A";

fn render_breakdown(breakdown: &ArgumentBreakdown, label: &str) -> String {
    let mut lines = vec![label.to_string()];

    lines.push(format!(
        "  Premise: {}",
        breakdown.premise.as_deref().unwrap_or(MISSING_FIELD)
    ));
    if let Some(topic) = &breakdown.premise_topic {
        lines.push(format!("    Topic: {}", topic));
    }

    lines.push(format!(
        "  Claim: {}",
        breakdown.claim.as_deref().unwrap_or(MISSING_FIELD)
    ));
    if let Some(topic) = &breakdown.claim_topic {
        lines.push(format!("    Topic: {}", topic));
    }

    lines.push(format!("  Argument: {}", breakdown.original_argument));
    lines.push(format!(
        "    Topic: {}",
        breakdown.argument_topic.as_deref().unwrap_or(MISSING_FIELD)
    ));
    lines.push(format!(
        "    Stance: {}",
        breakdown.stance.as_deref().unwrap_or(MISSING_FIELD)
    ));
    lines.push(format!(
        "    Reasoning Type: {}",
        breakdown.reasoning_type.as_deref().unwrap_or(MISSING_FIELD)
    ));

    lines.join("\n")
}

fn render_cell(cell: SimilarityCell) -> Option<String> {
    match cell {
        SimilarityCell::NotApplicable => None,
        SimilarityCell::Unavailable => Some(UNAVAILABLE_SCORE.to_string()),
        SimilarityCell::Score(value) => Some(format!("{:.4}", value)),
    }
}

/// Render a complete structure report as terminal text.
pub fn render_structure(report: &StructureReport) -> String {
    let mut blocks = vec![
        render_breakdown(&report.argument1, "Argument 1"),
        render_breakdown(&report.argument2, "Argument 2"),
    ];

    let mut similarity_lines = vec!["Structural Similarity".to_string()];
    if let Some(rendered) = render_cell(report.similarity.premises) {
        similarity_lines.push(format!("  Premises: {}", rendered));
    }
    if let Some(rendered) = render_cell(report.similarity.claims) {
        similarity_lines.push(format!("  Claims: {}", rendered));
    }
    if let Some(rendered) = render_cell(report.similarity.arguments) {
        similarity_lines.push(format!("  Arguments: {}", rendered));
    }
    blocks.push(similarity_lines.join("\n"));

    blocks.join("\n\n")
}
