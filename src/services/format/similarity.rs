//! Similarity Formatter
//!
//! Shapes the `compare` payload into a one-line summary plus a per-feature
//! detail block. Reserved bookkeeping keys never reach the detail output,
//! and features are listed by descending score.

use arg_lens_api::CompareResult;

use crate::models::AnalysisReport;

/// Feature keys the server uses for bookkeeping, excluded from the detail
/// breakdown.
pub const RESERVED_FEATURE_KEYS: [&str; 2] = ["global", "residual"];

/// Fixed descriptions for the known similarity features.
const FEATURE_DESCRIPTIONS: [(&str, &str); 8] = [
    ("Concepts", "overlap in shared concepts and terminology"),
    ("Entities", "named entities mentioned by both texts"),
    ("Vocabulary", "shared word choice and lexical range"),
    ("Structure", "sentence and discourse structure"),
    ("Syntax", "grammatical construction patterns"),
    ("Semantics", "meaning-level correspondence"),
    ("Style", "register and stylistic markers"),
    ("Sentiment", "emotional polarity and tone"),
];

/// Placeholder description for feature names not in the lookup table.
pub const UNKNOWN_FEATURE_DESCRIPTION: &str = "no description available";

fn feature_description(name: &str) -> &'static str {
    FEATURE_DESCRIPTIONS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, description)| *description)
        .unwrap_or(UNKNOWN_FEATURE_DESCRIPTION)
}

/// Format a `compare` result as summary + detail block.
pub fn format_similarity(result: &CompareResult) -> AnalysisReport {
    let basic = format!("Overall Similarity: {:.4}", result.overall_similarity);

    let mut features: Vec<(&str, f64)> = result
        .feature_similarities
        .iter()
        .filter(|(name, _)| !RESERVED_FEATURE_KEYS.contains(&name.as_str()))
        .map(|(name, score)| (name.as_str(), *score))
        .collect();
    // Descending by score, name as a deterministic tie-break
    features.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let details = features
        .iter()
        .map(|(name, score)| {
            format!("{} ({}): {:.4}", name, feature_description(name), score)
        })
        .collect::<Vec<_>>()
        .join("\n");

    AnalysisReport::detailed(basic, details)
}
