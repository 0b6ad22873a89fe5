//! Command-Line Interface
//!
//! Argument definitions for the terminal front end.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use arg_lens_core::{AnalysisKind, AnalysisRequest};

/// Arg Lens: argumentation analysis client
#[derive(Parser, Debug)]
#[command(name = "arg-lens", version, about, long_about = None)]
pub struct Cli {
    /// Analysis to run
    #[arg(value_enum)]
    pub kind: KindArg,

    /// First input text
    #[arg(long, default_value = "")]
    pub text1: String,

    /// Second input text (two-text analyses only)
    #[arg(long, default_value = "")]
    pub text2: String,

    /// Explicit topic for stance classification; omitted topics are
    /// extracted from the argument
    #[arg(long)]
    pub topic: Option<String>,

    /// Use the LLM-based topic-similarity endpoint variant
    #[arg(long)]
    pub topic_llm: bool,

    /// Base URL of the analysis service (overrides config and environment)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// CLI-facing mirror of [`AnalysisKind`].
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum KindArg {
    TextSimilarity,
    TopicSimilarity,
    StanceClassification,
    ReasoningTypeClassification,
    GlobalSimilarityAnalysis,
    ArgumentativeStructureAnalysis,
}

impl From<KindArg> for AnalysisKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::TextSimilarity => AnalysisKind::TextSimilarity,
            KindArg::TopicSimilarity => AnalysisKind::TopicSimilarity,
            KindArg::StanceClassification => AnalysisKind::StanceClassification,
            KindArg::ReasoningTypeClassification => AnalysisKind::ReasoningTypeClassification,
            KindArg::GlobalSimilarityAnalysis => AnalysisKind::GlobalSimilarityAnalysis,
            KindArg::ArgumentativeStructureAnalysis => {
                AnalysisKind::ArgumentativeStructureAnalysis
            }
        }
    }
}

impl Cli {
    /// Build the analysis request from the parsed arguments.
    pub fn to_request(&self) -> AnalysisRequest {
        let kind: AnalysisKind = self.kind.into();
        let mut request = AnalysisRequest::pairwise(kind, self.text1.clone(), self.text2.clone());
        if let Some(topic) = &self.topic {
            request = request.with_topic(topic.clone());
        }
        request
    }
}
