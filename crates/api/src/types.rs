//! Typed Result Payloads
//!
//! One deserializable struct per endpoint payload, keyed by the analysis the
//! endpoint serves. Optional sections use `Option`/defaults so that a
//! partially-populated payload still decodes; it is the formatters' job to
//! render placeholders for what is missing.

use serde::Deserialize;
use std::collections::HashMap;

/// Payload of the `compare` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareResult {
    /// Overall similarity of the two texts, in `[0, 1]`
    pub overall_similarity: f64,
    /// Named sub-feature scores; may include the reserved keys `global`
    /// and `residual`, which are excluded from presentation
    #[serde(default)]
    pub feature_similarities: HashMap<String, f64>,
}

/// Payload of the `extract-topics` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicExtraction {
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Payload of the `stance-classification` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StanceResult {
    pub stance: String,
    #[serde(default)]
    pub justification: String,
}

/// One ranked topic-pair comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicPairScore {
    pub topic1: String,
    pub topic2: String,
    pub score: f64,
}

/// Aggregate statistics over the topic-pair scores.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicSimilarityStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

/// Payload of the `topic-similarity` and `topic-similarity-llm` endpoints.
///
/// Every section is optional and independently omitted by the server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicSimilarityResult {
    #[serde(default)]
    pub interpretation: Option<String>,
    #[serde(default)]
    pub topics1: Option<Vec<String>>,
    #[serde(default)]
    pub topics2: Option<Vec<String>>,
    #[serde(default)]
    pub similarity_scores: Option<Vec<TopicPairScore>>,
    #[serde(default)]
    pub comparisons: Option<u64>,
    #[serde(default)]
    pub stats: Option<TopicSimilarityStats>,
}

impl TopicSimilarityResult {
    /// Highest ranked topic-pair score, if any were returned.
    pub fn top_score(&self) -> Option<f64> {
        self.similarity_scores
            .as_ref()?
            .iter()
            .map(|pair| pair.score)
            .fold(None, |best, score| match best {
                Some(b) if b >= score => Some(b),
                _ => Some(score),
            })
    }
}

/// Payload of the `reasoning-type-classification` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ReasoningResult {
    pub reasoning_type: String,
    #[serde(default)]
    pub justification: String,
}

/// Payload of the `extract-premise-claim` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PremiseClaimResult {
    #[serde(default)]
    pub premise: String,
    #[serde(default)]
    pub claim: String,
    pub has_premise: bool,
    pub has_claim: bool,
}
