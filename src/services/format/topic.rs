//! Topic-Similarity Formatter
//!
//! Shapes the `topic-similarity` / `topic-similarity-llm` payload. Both
//! endpoint variants share one payload contract; every section is optional
//! and independently omitted when the server did not produce it.

use arg_lens_api::TopicSimilarityResult;

use crate::models::AnalysisReport;

/// Summary used when the server supplied no interpretation sentence.
const DEFAULT_INTERPRETATION: &str = "Topic similarity analysis completed.";

/// Format a topic-similarity result as summary + detail sections.
pub fn format_topic_similarity(result: &TopicSimilarityResult) -> AnalysisReport {
    let basic = result
        .interpretation
        .clone()
        .unwrap_or_else(|| DEFAULT_INTERPRETATION.to_string());

    let mut sections: Vec<String> = Vec::new();

    if let Some(topics) = &result.topics1 {
        sections.push(format!("Topics in Text 1: {}", topics.join(", ")));
    }
    if let Some(topics) = &result.topics2 {
        sections.push(format!("Topics in Text 2: {}", topics.join(", ")));
    }

    if let Some(scores) = &result.similarity_scores {
        let mut ranked = scores.clone();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        let header = match result.comparisons {
            Some(count) => format!("Topic pair similarities ({} comparisons):", count),
            None => "Topic pair similarities:".to_string(),
        };
        let mut block = vec![header];
        for pair in &ranked {
            block.push(format!(
                "  {} <-> {}: {:.4}",
                pair.topic1, pair.topic2, pair.score
            ));
        }
        sections.push(block.join("\n"));
    }

    if let Some(stats) = &result.stats {
        sections.push(format!(
            "Statistics: mean {:.4}, max {:.4}, min {:.4}",
            stats.mean, stats.max, stats.min
        ));
    }

    AnalysisReport::detailed(basic, sections.join("\n\n"))
}
