//! Similarity Pipelines
//!
//! The two single-call pairwise kinds: text similarity and topic
//! similarity. Any error propagates straight to the caller.

use arg_lens_core::AnalysisRequest;

use super::PipelineContext;
use crate::models::AnalysisReport;
use crate::services::format::{format_similarity, format_topic_similarity};
use crate::utils::error::AppResult;

/// Overall + per-feature similarity between the two texts.
pub async fn text_similarity(
    ctx: &PipelineContext<'_>,
    request: &AnalysisRequest,
) -> AppResult<AnalysisReport> {
    let result = ctx.client.compare(&request.text1, &request.text2).await?;
    Ok(format_similarity(&result))
}

/// Topic-level similarity between the two texts. The endpoint variant
/// (topic-model vs LLM) is selected by the pipeline context.
pub async fn topic_similarity(
    ctx: &PipelineContext<'_>,
    request: &AnalysisRequest,
) -> AppResult<AnalysisReport> {
    let result = ctx
        .client
        .topic_similarity(&request.text1, &request.text2, ctx.prefer_llm_topics)
        .await?;
    Ok(format_topic_similarity(&result))
}
