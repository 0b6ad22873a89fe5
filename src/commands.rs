//! Command Facade
//!
//! The front door the presentation layer calls: validate the request, run
//! the kind's pipeline, and commit the report to the session unless a newer
//! submission has superseded this one.

use arg_lens_core::AnalysisRequest;

use crate::models::AnalysisReport;
use crate::services::pipeline::{self, PipelineContext};
use crate::state::AnalysisSession;
use crate::utils::error::AppResult;

/// Run one analysis end to end.
///
/// Validation failures surface immediately without starting the pipeline.
/// The returned report is also committed to the session's displayed state,
/// unless a newer submission started in the meantime; a superseded run
/// still returns its report but never touches the displayed state.
pub async fn run_analysis(
    session: &AnalysisSession,
    ctx: &PipelineContext<'_>,
    request: &AnalysisRequest,
) -> AppResult<AnalysisReport> {
    request.validate()?;

    let generation = session.begin().await;
    match pipeline::dispatch(ctx, request).await {
        Ok(report) => {
            session.commit(&generation, report.clone()).await;
            Ok(report)
        }
        Err(error) => {
            session.fail(&generation).await;
            Err(error)
        }
    }
}
