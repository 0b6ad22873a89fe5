//! Reasoning-Type Pipeline
//!
//! Single call on one text; errors propagate.

use arg_lens_core::AnalysisRequest;

use super::PipelineContext;
use crate::models::AnalysisReport;
use crate::services::format::format_reasoning;
use crate::utils::error::AppResult;

pub async fn run(
    ctx: &PipelineContext<'_>,
    request: &AnalysisRequest,
) -> AppResult<AnalysisReport> {
    let result = ctx.client.classify_reasoning(&request.text1).await?;
    Ok(AnalysisReport::plain(format_reasoning(&result)))
}
