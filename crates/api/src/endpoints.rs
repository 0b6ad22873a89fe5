//! Endpoint Map
//!
//! Logical names for the remote analysis endpoints. Physical URLs are
//! deployment configuration: the client joins these paths onto a configured
//! base URL. This is the single request contract; earlier deployments used
//! drifting field names and hosts, which are superseded, not supported.

use std::fmt;

/// A remote analysis endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Overall + per-feature similarity between two texts
    Compare,
    /// Topic extraction for one text
    ExtractTopics,
    /// Stance + justification given an argument and a topic
    StanceClassification,
    /// Ranked topic-pair comparison between two texts (topic-model variant)
    TopicSimilarity,
    /// Ranked topic-pair comparison between two texts (LLM variant)
    TopicSimilarityLlm,
    /// Reasoning-type label + justification for one text
    ReasoningTypeClassification,
    /// Premise/claim decomposition with presence flags
    ExtractPremiseClaim,
}

impl Endpoint {
    /// URL path for this endpoint, relative to the configured base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Compare => "/compare",
            Endpoint::ExtractTopics => "/extract-topics",
            Endpoint::StanceClassification => "/stance-classification",
            Endpoint::TopicSimilarity => "/topic-similarity",
            Endpoint::TopicSimilarityLlm => "/topic-similarity-llm",
            Endpoint::ReasoningTypeClassification => "/reasoning-type-classification",
            Endpoint::ExtractPremiseClaim => "/extract-premise-claim",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().trim_start_matches('/'))
    }
}
