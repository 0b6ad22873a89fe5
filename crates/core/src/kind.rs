//! Analysis Kinds
//!
//! The closed enumeration of analyses the client can run. The kind selects
//! which remote endpoints are invoked, how the pipeline is sequenced, and
//! which formatter shapes the result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The analysis selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisKind {
    /// Pairwise linguistic similarity between two texts
    TextSimilarity,
    /// Topic-level similarity between two arguments
    TopicSimilarity,
    /// Stance of one argument with respect to a topic
    StanceClassification,
    /// Reasoning type used by one text
    ReasoningTypeClassification,
    /// Four-dimension similarity report over two texts
    GlobalSimilarityAnalysis,
    /// Full argumentative breakdown of two texts plus structural comparison
    ArgumentativeStructureAnalysis,
}

impl AnalysisKind {
    /// All kinds, in presentation order.
    pub const ALL: [AnalysisKind; 6] = [
        AnalysisKind::ArgumentativeStructureAnalysis,
        AnalysisKind::GlobalSimilarityAnalysis,
        AnalysisKind::TextSimilarity,
        AnalysisKind::TopicSimilarity,
        AnalysisKind::StanceClassification,
        AnalysisKind::ReasoningTypeClassification,
    ];

    /// Stable kebab-case identifier for this kind.
    pub fn id(&self) -> &'static str {
        match self {
            AnalysisKind::TextSimilarity => "text-similarity",
            AnalysisKind::TopicSimilarity => "topic-similarity",
            AnalysisKind::StanceClassification => "stance-classification",
            AnalysisKind::ReasoningTypeClassification => "reasoning-type-classification",
            AnalysisKind::GlobalSimilarityAnalysis => "global-similarity-analysis",
            AnalysisKind::ArgumentativeStructureAnalysis => "argumentative-structure-analysis",
        }
    }

    /// User-facing description of what the analysis does.
    pub fn description(&self) -> &'static str {
        match self {
            AnalysisKind::TextSimilarity => {
                "Compare two texts to analyze their linguistic similarity based on shared vocabulary and structure."
            }
            AnalysisKind::TopicSimilarity => {
                "Analyze two arguments to determine similarity in topics"
            }
            AnalysisKind::StanceClassification => {
                "Determine if the argument is for, against, or is neutral with respect to the given topic. If no topic is provided, the system will extract the topic from the argument."
            }
            AnalysisKind::ReasoningTypeClassification => {
                "Classify the type of reasoning used in the provided text."
            }
            AnalysisKind::GlobalSimilarityAnalysis => {
                "Perform a comprehensive similarity analysis across multiple dimensions."
            }
            AnalysisKind::ArgumentativeStructureAnalysis => {
                "Extract and analyze the argumentative structure of two texts, including premises, claims, topics, stances, and reasoning types."
            }
        }
    }

    /// Whether this kind operates on two input texts.
    pub fn requires_second_text(&self) -> bool {
        !matches!(
            self,
            AnalysisKind::StanceClassification | AnalysisKind::ReasoningTypeClassification
        )
    }

    /// Whether this kind accepts an explicit topic from the user.
    pub fn accepts_topic(&self) -> bool {
        matches!(self, AnalysisKind::StanceClassification)
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for AnalysisKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text-similarity" => Ok(AnalysisKind::TextSimilarity),
            "topic-similarity" => Ok(AnalysisKind::TopicSimilarity),
            "stance-classification" => Ok(AnalysisKind::StanceClassification),
            "reasoning-type-classification" => Ok(AnalysisKind::ReasoningTypeClassification),
            "global-similarity-analysis" => Ok(AnalysisKind::GlobalSimilarityAnalysis),
            "argumentative-structure-analysis" => {
                Ok(AnalysisKind::ArgumentativeStructureAnalysis)
            }
            other => Err(CoreError::validation(format!(
                "Unknown analysis kind: {}",
                other
            ))),
        }
    }
}
