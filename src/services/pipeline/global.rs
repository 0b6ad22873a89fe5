//! Global-Similarity Pipeline
//!
//! Fan-out of four independent measurement chains over the two texts:
//! overall text similarity, top topic-similarity score, per-text stance
//! (topic extraction feeding stance classification), and per-text reasoning
//! type. Chains share no data, so they are dispatched concurrently; each
//! degrades independently to the failure placeholder.

use arg_lens_core::AnalysisRequest;

use super::{absorb, PipelineContext};
use crate::models::AnalysisReport;
use crate::services::format::{format_global, GlobalMetrics};
use crate::utils::error::AppResult;

pub async fn run(
    ctx: &PipelineContext<'_>,
    request: &AnalysisRequest,
) -> AppResult<AnalysisReport> {
    let text1 = request.text1.as_str();
    let text2 = request.text2.as_str();

    let (compare, topic_similarity, stance1, stance2, reasoning1, reasoning2) = tokio::join!(
        ctx.client.compare(text1, text2),
        ctx.client
            .topic_similarity(text1, text2, ctx.prefer_llm_topics),
        stance_chain(ctx, text1),
        stance_chain(ctx, text2),
        ctx.client.classify_reasoning(text1),
        ctx.client.classify_reasoning(text2),
    );

    let metrics = GlobalMetrics {
        text_similarity: absorb("text-similarity chain", compare)
            .map(|result| result.overall_similarity),
        top_topic_similarity: absorb("topic-similarity chain", topic_similarity)
            .and_then(|result| result.top_score()),
        stance1,
        stance2,
        reasoning1: absorb("reasoning chain (text 1)", reasoning1)
            .map(|result| result.reasoning_type),
        reasoning2: absorb("reasoning chain (text 2)", reasoning2)
            .map(|result| result.reasoning_type),
    };

    Ok(AnalysisReport::plain(format_global(&metrics)))
}

/// Stance chain for one text: extract topics, then classify stance against
/// the first one. Either step failing degrades the whole chain.
async fn stance_chain(ctx: &PipelineContext<'_>, text: &str) -> Option<String> {
    let extraction = absorb("stance chain: topic extraction", ctx.client.extract_topics(text).await)?;
    let topic = extraction
        .topics
        .into_iter()
        .map(|topic| topic.trim().to_string())
        .find(|topic| !topic.is_empty())?;
    let stance = absorb(
        "stance chain: classification",
        ctx.client.classify_stance(text, &topic).await,
    )?;
    Some(format!("{} (topic: {})", stance.stance, topic))
}
