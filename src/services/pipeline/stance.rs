//! Stance Pipeline
//!
//! With an explicit topic this is a single call. Without one, candidate
//! topics are extracted first and one stance call is made per topic; the
//! calls are issued concurrently but presented in extraction order, and a
//! failed per-topic call drops only that topic from the result set.

use futures_util::future::join_all;

use arg_lens_api::{ApiError, StanceResult};
use arg_lens_core::AnalysisRequest;

use super::{absorb, PipelineContext};
use crate::models::AnalysisReport;
use crate::services::format::{format_stance, format_stance_entries};
use crate::utils::error::AppResult;

pub async fn run(
    ctx: &PipelineContext<'_>,
    request: &AnalysisRequest,
) -> AppResult<AnalysisReport> {
    let text = request.text1.as_str();

    if let Some(topic) = request.explicit_topic() {
        let result = ctx.client.classify_stance(text, topic).await?;
        return Ok(AnalysisReport::plain(format_stance(&result)));
    }

    // Non-optional first step: without topics there is nothing to classify
    // against, so this failure is user-visible.
    let extraction = ctx.client.extract_topics(text).await?;
    let topics: Vec<String> = extraction
        .topics
        .into_iter()
        .map(|topic| topic.trim().to_string())
        .filter(|topic| !topic.is_empty())
        .collect();
    if topics.is_empty() {
        return Err(ApiError::semantic("No topics could be extracted from the argument").into());
    }

    // join_all preserves input order, so presentation follows extraction
    // order even though the calls complete independently.
    let calls = topics
        .iter()
        .map(|topic| ctx.client.classify_stance(text, topic));
    let outcomes = join_all(calls).await;

    let entries: Vec<(String, StanceResult)> = topics
        .into_iter()
        .zip(outcomes)
        .filter_map(|(topic, outcome)| {
            absorb("per-topic stance", outcome).map(|result| (topic, result))
        })
        .collect();

    if entries.is_empty() {
        return Err(
            ApiError::semantic("Stance classification failed for every extracted topic").into(),
        );
    }

    Ok(AnalysisReport::plain(format_stance_entries(&entries)))
}
