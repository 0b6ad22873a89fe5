//! Argumentative Structure Models
//!
//! Per-text argument breakdowns and the structural comparison assembled by
//! the argumentative-structure pipeline. All fields that depend on a remote
//! sub-call are optional: a failed sub-call degrades its own field only.

use serde::Serialize;

/// Breakdown of a single input text into its argumentative components.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArgumentBreakdown {
    /// The input text as submitted
    pub original_argument: String,
    /// Extracted premise, when the decomposition found one
    pub premise: Option<String>,
    /// Extracted claim, when the decomposition found one
    pub claim: Option<String>,
    /// Topic of the premise
    pub premise_topic: Option<String>,
    /// Topic of the claim
    pub claim_topic: Option<String>,
    /// Topic of the whole argument (first extracted topic)
    pub argument_topic: Option<String>,
    /// Stance of the argument relative to its topic
    pub stance: Option<String>,
    /// Reasoning type used by the argument
    pub reasoning_type: Option<String>,
}

impl ArgumentBreakdown {
    /// Start a breakdown for one input text.
    pub fn new(original_argument: impl Into<String>) -> Self {
        Self {
            original_argument: original_argument.into(),
            ..Self::default()
        }
    }

    pub fn has_premise(&self) -> bool {
        self.premise.is_some()
    }

    pub fn has_claim(&self) -> bool {
        self.claim.is_some()
    }
}

/// Outcome of one structural similarity comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SimilarityCell {
    /// Comparison was not attempted (a side lacks the component); the row
    /// is omitted from presentation
    NotApplicable,
    /// Comparison was attempted but the call failed; renders as "N/A"
    Unavailable,
    /// Comparison succeeded
    Score(f64),
}

impl SimilarityCell {
    /// Build a cell from an attempted comparison's outcome.
    pub fn attempted(score: Option<f64>) -> Self {
        match score {
            Some(value) => SimilarityCell::Score(value),
            None => SimilarityCell::Unavailable,
        }
    }

    pub fn is_applicable(&self) -> bool {
        !matches!(self, SimilarityCell::NotApplicable)
    }
}

/// Three-way structural similarity between the two arguments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StructureSimilarity {
    /// Premise-vs-premise; attempted only when both sides have a premise
    pub premises: SimilarityCell,
    /// Claim-vs-claim; attempted only when both sides have a claim
    pub claims: SimilarityCell,
    /// Argument-vs-argument; always attempted
    pub arguments: SimilarityCell,
}

/// Complete result of an argumentative-structure analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureReport {
    pub argument1: ArgumentBreakdown,
    pub argument2: ArgumentBreakdown,
    pub similarity: StructureSimilarity,
}
