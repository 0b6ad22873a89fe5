//! Analysis Pipelines
//!
//! One orchestration module per analysis kind. Single-call kinds propagate
//! the first error to the caller; fan-out and chained kinds absorb
//! individual sub-call failures into placeholders and fail only when the
//! pipeline cannot proceed at all. Steps with a data dependency are
//! sequenced; independent steps are dispatched concurrently.

pub mod global;
pub mod reasoning;
pub mod similarity;
pub mod stance;
pub mod structure;

use tracing::warn;

use arg_lens_api::{ApiClient, ApiResult};
use arg_lens_core::{AnalysisKind, AnalysisRequest};

use crate::models::AnalysisReport;
use crate::utils::error::AppResult;

/// Shared input to every pipeline invocation.
pub struct PipelineContext<'a> {
    pub client: &'a ApiClient,
    /// Use the LLM-based topic-similarity endpoint variant
    pub prefer_llm_topics: bool,
}

impl<'a> PipelineContext<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            prefer_llm_topics: false,
        }
    }

    pub fn with_llm_topics(mut self, prefer: bool) -> Self {
        self.prefer_llm_topics = prefer;
        self
    }
}

/// Run the pipeline selected by the request's kind.
///
/// The request must already be validated; pipelines assume the relevant
/// text fields are non-empty.
pub async fn dispatch(
    ctx: &PipelineContext<'_>,
    request: &AnalysisRequest,
) -> AppResult<AnalysisReport> {
    match request.kind {
        AnalysisKind::TextSimilarity => similarity::text_similarity(ctx, request).await,
        AnalysisKind::TopicSimilarity => similarity::topic_similarity(ctx, request).await,
        AnalysisKind::StanceClassification => stance::run(ctx, request).await,
        AnalysisKind::ReasoningTypeClassification => reasoning::run(ctx, request).await,
        AnalysisKind::GlobalSimilarityAnalysis => global::run(ctx, request).await,
        AnalysisKind::ArgumentativeStructureAnalysis => structure::run(ctx, request).await,
    }
}

/// Absorb a sub-call failure: log it and degrade to `None` so the caller
/// substitutes a placeholder instead of aborting the pipeline.
pub(crate) fn absorb<T>(step: &str, result: ApiResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(step, %error, "sub-call failed, degrading to placeholder");
            None
        }
    }
}
