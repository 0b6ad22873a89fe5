//! Argumentative-Structure Pipeline
//!
//! The deepest chain. For each text, independently: premise/claim
//! decomposition, then (concurrently) component-topic extraction, the
//! whole-argument topic + stance chain, and reasoning-type classification.
//! The two per-text pipelines run concurrently. Afterwards the structural
//! similarity comparisons are issued: arguments always, premises and claims
//! only when both sides produced the component. Every individual sub-call
//! failure degrades only its own field.

use arg_lens_core::AnalysisRequest;

use super::{absorb, PipelineContext};
use crate::models::structure::{
    ArgumentBreakdown, SimilarityCell, StructureReport, StructureSimilarity,
};
use crate::models::AnalysisReport;
use crate::utils::error::AppResult;

pub async fn run(
    ctx: &PipelineContext<'_>,
    request: &AnalysisRequest,
) -> AppResult<AnalysisReport> {
    let (argument1, argument2) = tokio::join!(
        analyze_argument(ctx, &request.text1),
        analyze_argument(ctx, &request.text2),
    );

    let similarity = compare_structures(ctx, request, &argument1, &argument2).await;

    Ok(AnalysisReport::Structure(StructureReport {
        argument1,
        argument2,
        similarity,
    }))
}

/// Break one text down into its argumentative components.
async fn analyze_argument(ctx: &PipelineContext<'_>, text: &str) -> ArgumentBreakdown {
    let mut breakdown = ArgumentBreakdown::new(text);

    if let Some(decomposition) = absorb(
        "premise/claim extraction",
        ctx.client.extract_premise_claim(text).await,
    ) {
        if decomposition.has_premise && !decomposition.premise.trim().is_empty() {
            breakdown.premise = Some(decomposition.premise);
        }
        if decomposition.has_claim && !decomposition.claim.trim().is_empty() {
            breakdown.claim = Some(decomposition.claim);
        }
    }

    // Component topics, the argument topic + stance chain, and the reasoning
    // type all depend on the decomposition above but not on each other.
    let (premise_topic, claim_topic, topic_and_stance, reasoning_type) = tokio::join!(
        component_topic(ctx, breakdown.premise.as_deref(), "premise topic"),
        component_topic(ctx, breakdown.claim.as_deref(), "claim topic"),
        argument_topic_and_stance(ctx, text),
        async {
            absorb("reasoning type", ctx.client.classify_reasoning(text).await)
                .map(|result| result.reasoning_type)
        },
    );

    breakdown.premise_topic = premise_topic;
    breakdown.claim_topic = claim_topic;
    breakdown.argument_topic = topic_and_stance.0;
    breakdown.stance = topic_and_stance.1;
    breakdown.reasoning_type = reasoning_type;
    breakdown
}

/// Topic of an extracted component, when the component exists.
async fn component_topic(
    ctx: &PipelineContext<'_>,
    component: Option<&str>,
    step: &str,
) -> Option<String> {
    let text = component?;
    let extraction = absorb(step, ctx.client.extract_topics(text).await)?;
    extraction
        .topics
        .into_iter()
        .map(|topic| topic.trim().to_string())
        .find(|topic| !topic.is_empty())
}

/// The whole-argument topic set and, keyed on its first topic, the stance.
async fn argument_topic_and_stance(
    ctx: &PipelineContext<'_>,
    text: &str,
) -> (Option<String>, Option<String>) {
    let topic = match absorb("argument topics", ctx.client.extract_topics(text).await) {
        Some(extraction) => extraction
            .topics
            .into_iter()
            .map(|topic| topic.trim().to_string())
            .find(|topic| !topic.is_empty()),
        None => None,
    };

    let stance = match &topic {
        Some(topic) => absorb("argument stance", ctx.client.classify_stance(text, topic).await)
            .map(|result| result.stance),
        None => None,
    };

    (topic, stance)
}

/// Issue the three structural similarity comparisons.
async fn compare_structures(
    ctx: &PipelineContext<'_>,
    request: &AnalysisRequest,
    argument1: &ArgumentBreakdown,
    argument2: &ArgumentBreakdown,
) -> StructureSimilarity {
    let (premises, claims, arguments) = tokio::join!(
        component_similarity(
            ctx,
            argument1.premise.as_deref(),
            argument2.premise.as_deref(),
            "premise similarity",
        ),
        component_similarity(
            ctx,
            argument1.claim.as_deref(),
            argument2.claim.as_deref(),
            "claim similarity",
        ),
        async {
            let outcome = absorb(
                "argument similarity",
                ctx.client.compare(&request.text1, &request.text2).await,
            );
            SimilarityCell::attempted(outcome.map(|result| result.overall_similarity))
        },
    );

    StructureSimilarity {
        premises,
        claims,
        arguments,
    }
}

/// Premise-vs-premise / claim-vs-claim comparison, attempted only when both
/// sides produced the component.
async fn component_similarity(
    ctx: &PipelineContext<'_>,
    first: Option<&str>,
    second: Option<&str>,
    step: &str,
) -> SimilarityCell {
    match (first, second) {
        (Some(a), Some(b)) => {
            let outcome = absorb(step, ctx.client.compare(a, b).await);
            SimilarityCell::attempted(outcome.map(|result| result.overall_similarity))
        }
        _ => SimilarityCell::NotApplicable,
    }
}
