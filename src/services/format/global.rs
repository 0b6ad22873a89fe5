//! Global-Similarity Formatter
//!
//! Aggregates the four independently-obtained metrics into a fixed
//! four-section report. A chain that failed renders as the failure
//! placeholder in its section; the section itself is never omitted.

/// Placeholder for a metric whose retrieval failed.
pub const FAILURE_PLACEHOLDER: &str = "Failed to retrieve";

/// The four metrics, each `None` when its chain failed. The stance and
/// reasoning chains run per input text, so their sections carry one value
/// per text, degrading independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalMetrics {
    /// Overall text similarity from `compare`
    pub text_similarity: Option<f64>,
    /// Highest ranked topic-pair score
    pub top_topic_similarity: Option<f64>,
    /// Composed stance summary for each input text
    pub stance1: Option<String>,
    pub stance2: Option<String>,
    /// Reasoning-type label for each input text
    pub reasoning1: Option<String>,
    pub reasoning2: Option<String>,
}

fn score_section(score: Option<f64>) -> String {
    match score {
        Some(value) => format!("{:.4}", value),
        None => FAILURE_PLACEHOLDER.to_string(),
    }
}

fn per_text_section(first: &Option<String>, second: &Option<String>) -> String {
    format!(
        "Text 1: {}\nText 2: {}",
        first.as_deref().unwrap_or(FAILURE_PLACEHOLDER),
        second.as_deref().unwrap_or(FAILURE_PLACEHOLDER)
    )
}

/// Format the four-section global report. Sections appear in fixed order
/// regardless of how many chains failed.
pub fn format_global(metrics: &GlobalMetrics) -> String {
    format!(
        "Text Similarity:\n{}\n\nTopic Similarity:\n{}\n\nStance:\n{}\n\nReasoning Type:\n{}",
        score_section(metrics.text_similarity),
        score_section(metrics.top_topic_similarity),
        per_text_section(&metrics.stance1, &metrics.stance2),
        per_text_section(&metrics.reasoning1, &metrics.reasoning2),
    )
}
