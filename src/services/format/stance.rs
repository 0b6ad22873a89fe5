//! Stance Formatter

use arg_lens_api::StanceResult;

/// Format a single stance classification: label line plus justification.
pub fn format_stance(result: &StanceResult) -> String {
    if result.justification.trim().is_empty() {
        format!("Stance: {}", result.stance)
    } else {
        format!("Stance: {}\n{}", result.stance, result.justification)
    }
}

/// Format per-topic stance results as numbered entries, in the order the
/// topics were extracted.
pub fn format_stance_entries(entries: &[(String, StanceResult)]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(index, (topic, result))| {
            let mut entry = format!(
                "{}. Topic: {}\n   Stance: {}",
                index + 1,
                topic,
                result.stance
            );
            if !result.justification.trim().is_empty() {
                entry.push_str(&format!("\n   {}", result.justification));
            }
            entry
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
