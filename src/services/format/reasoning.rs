//! Reasoning-Type Formatter

use arg_lens_api::ReasoningResult;

/// Format a reasoning-type classification: label line plus justification.
pub fn format_reasoning(result: &ReasoningResult) -> String {
    if result.justification.trim().is_empty() {
        format!("Reasoning Type: {}", result.reasoning_type)
    } else {
        format!(
            "Reasoning Type: {}\n{}",
            result.reasoning_type, result.justification
        )
    }
}
