//! Pipeline Integration Tests
//!
//! Runs each analysis kind end to end against a mocked analysis service and
//! checks the formatted output, including graceful degradation of failed
//! sub-calls.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use arg_lens::{run_analysis, AnalysisReport, AnalysisSession, PipelineContext};
use arg_lens_api::ApiClient;
use arg_lens_core::{AnalysisKind, AnalysisRequest};

fn success_body(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status": "success",
        "result": result
    }))
}

async fn mount(server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn analyze(server: &MockServer, request: &AnalysisRequest) -> AnalysisReport {
    let client = ApiClient::new(server.uri());
    let ctx = PipelineContext::new(&client);
    let session = AnalysisSession::new();
    run_analysis(&session, &ctx, request).await.unwrap()
}

#[tokio::test]
async fn test_text_similarity_end_to_end() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/compare",
        success_body(json!({
            "overall_similarity": 1.0,
            "feature_similarities": {"global": 1, "Concepts": 0.9, "residual": 0.1}
        })),
    )
    .await;

    let request = AnalysisRequest::pairwise(
        AnalysisKind::TextSimilarity,
        "Climate change is real",
        "Climate change is real",
    );
    match analyze(&server, &request).await {
        AnalysisReport::Detailed { basic, details } => {
            assert_eq!(basic, "Overall Similarity: 1.0000");
            assert_eq!(details.lines().count(), 1);
            assert!(details.contains("Concepts"));
        }
        other => panic!("unexpected report shape: {:?}", other),
    }
}

#[tokio::test]
async fn test_stance_without_topic_classifies_each_extracted_topic() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/extract-topics",
        success_body(json!({"topics": ["policy"]})),
    )
    .await;
    mount(
        &server,
        "/stance-classification",
        success_body(json!({"stance": "For", "justification": "Endorses the policy."})),
    )
    .await;

    let request =
        AnalysisRequest::single(AnalysisKind::StanceClassification, "We should adopt it");
    match analyze(&server, &request).await {
        AnalysisReport::Plain { text } => {
            assert!(text.starts_with("1. Topic: policy"));
            assert!(text.contains("Stance: For"));
            assert!(!text.contains("2."));
        }
        other => panic!("unexpected report shape: {:?}", other),
    }
}

#[tokio::test]
async fn test_stance_skips_topics_whose_sub_call_failed() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/extract-topics",
        success_body(json!({"topics": ["taxes", "growth"]})),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/stance-classification"))
        .and(body_partial_json(json!({"topic": "taxes"})))
        .respond_with(success_body(
            json!({"stance": "Against", "justification": ""}),
        ))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/stance-classification"))
        .and(body_partial_json(json!({"topic": "growth"})))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let request = AnalysisRequest::single(AnalysisKind::StanceClassification, "Cut taxes now");
    match analyze(&server, &request).await {
        AnalysisReport::Plain { text } => {
            assert!(text.contains("1. Topic: taxes"));
            assert!(!text.contains("growth"));
        }
        other => panic!("unexpected report shape: {:?}", other),
    }
}

#[tokio::test]
async fn test_stance_with_explicit_topic_makes_single_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stance-classification"))
        .and(body_partial_json(json!({"topic": "taxes"})))
        .respond_with(success_body(
            json!({"stance": "Against", "justification": "Opposes higher rates."}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let request = AnalysisRequest::single(AnalysisKind::StanceClassification, "Cut taxes now")
        .with_topic("taxes");
    match analyze(&server, &request).await {
        AnalysisReport::Plain { text } => {
            assert_eq!(text, "Stance: Against\nOpposes higher rates.");
        }
        other => panic!("unexpected report shape: {:?}", other),
    }
    // No topic-extraction call was made for the explicit topic
    assert!(server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .all(|req| req.url.path() != "/extract-topics"));
}

#[tokio::test]
async fn test_global_analysis_substitutes_placeholder_for_failed_chain() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/compare",
        success_body(json!({"overall_similarity": 0.8123})),
    )
    .await;
    mount(&server, "/topic-similarity", ResponseTemplate::new(500)).await;
    mount(
        &server,
        "/extract-topics",
        success_body(json!({"topics": ["policy"]})),
    )
    .await;
    mount(
        &server,
        "/stance-classification",
        success_body(json!({"stance": "For", "justification": ""})),
    )
    .await;
    mount(
        &server,
        "/reasoning-type-classification",
        success_body(json!({"reasoning_type": "Deductive", "justification": ""})),
    )
    .await;

    let request =
        AnalysisRequest::pairwise(AnalysisKind::GlobalSimilarityAnalysis, "first", "second");
    match analyze(&server, &request).await {
        AnalysisReport::Plain { text } => {
            assert!(text.contains("Text Similarity:\n0.8123"));
            assert!(text.contains("Topic Similarity:\nFailed to retrieve"));
            assert!(text.contains("Stance:\nText 1: For (topic: policy)"));
            assert!(text.contains("Reasoning Type:\nText 1: Deductive\nText 2: Deductive"));
        }
        other => panic!("unexpected report shape: {:?}", other),
    }
}

#[tokio::test]
async fn test_structure_analysis_conditional_similarity_rows() {
    let server = MockServer::start().await;
    // First text decomposes fully, second has no premise
    Mock::given(method("POST"))
        .and(path("/extract-premise-claim"))
        .and(body_partial_json(json!({"text": "Taxes fund services, so raise them"})))
        .respond_with(success_body(json!({
            "premise": "Taxes fund services",
            "claim": "Raise taxes",
            "has_premise": true,
            "has_claim": true
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/extract-premise-claim"))
        .and(body_partial_json(json!({"text": "Taxes are too high"})))
        .respond_with(success_body(json!({
            "premise": "",
            "claim": "Taxes are too high",
            "has_premise": false,
            "has_claim": true
        })))
        .mount(&server)
        .await;
    mount(
        &server,
        "/extract-topics",
        success_body(json!({"topics": ["tax policy"]})),
    )
    .await;
    mount(
        &server,
        "/stance-classification",
        success_body(json!({"stance": "For", "justification": ""})),
    )
    .await;
    mount(
        &server,
        "/reasoning-type-classification",
        success_body(json!({"reasoning_type": "Deductive", "justification": ""})),
    )
    .await;
    mount(
        &server,
        "/compare",
        success_body(json!({"overall_similarity": 0.5})),
    )
    .await;

    let request = AnalysisRequest::pairwise(
        AnalysisKind::ArgumentativeStructureAnalysis,
        "Taxes fund services, so raise them",
        "Taxes are too high",
    );
    match analyze(&server, &request).await {
        AnalysisReport::Structure(report) => {
            assert!(report.argument1.has_premise());
            assert!(report.argument1.has_claim());
            assert!(!report.argument2.has_premise());
            assert_eq!(report.argument1.argument_topic.as_deref(), Some("tax policy"));
            assert_eq!(report.argument1.stance.as_deref(), Some("For"));

            // Premise comparison never attempted, claim and argument were
            let rendered = AnalysisReport::Structure(report.clone()).render();
            assert!(!rendered.contains("Premises:"));
            assert!(rendered.contains("Claims: 0.5000"));
            assert!(rendered.contains("Arguments: 0.5000"));
        }
        other => panic!("unexpected report shape: {:?}", other),
    }
}

#[tokio::test]
async fn test_structure_analysis_degrades_failed_sub_calls() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/extract-premise-claim",
        ResponseTemplate::new(500),
    )
    .await;
    mount(&server, "/extract-topics", ResponseTemplate::new(500)).await;
    mount(
        &server,
        "/reasoning-type-classification",
        success_body(json!({"reasoning_type": "Inductive", "justification": ""})),
    )
    .await;
    mount(&server, "/compare", ResponseTemplate::new(500)).await;

    let request = AnalysisRequest::pairwise(
        AnalysisKind::ArgumentativeStructureAnalysis,
        "first argument",
        "second argument",
    );
    match analyze(&server, &request).await {
        AnalysisReport::Structure(report) => {
            assert!(!report.argument1.has_premise());
            assert!(report.argument1.argument_topic.is_none());
            assert_eq!(report.argument1.reasoning_type.as_deref(), Some("Inductive"));

            let rendered = AnalysisReport::Structure(report).render();
            assert!(rendered.contains("Premise: -"));
            assert!(rendered.contains("Arguments: N/A"));
        }
        other => panic!("unexpected report shape: {:?}", other),
    }
}

#[tokio::test]
async fn test_single_call_kind_propagates_transport_error() {
    let server = MockServer::start().await;
    mount(&server, "/compare", ResponseTemplate::new(502)).await;

    let client = ApiClient::new(server.uri());
    let ctx = PipelineContext::new(&client);
    let session = AnalysisSession::new();
    let request = AnalysisRequest::pairwise(AnalysisKind::TextSimilarity, "a", "b");

    let err = run_analysis(&session, &ctx, &request).await.unwrap_err();
    assert!(err.to_string().contains("502"));
    // The result area stays cleared after a failure
    assert!(session.current().await.is_none());
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_topic_similarity_llm_variant_selected_by_context() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/topic-similarity-llm"))
        .respond_with(success_body(json!({
            "interpretation": "Highly related topics."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let ctx = PipelineContext::new(&client).with_llm_topics(true);
    let session = AnalysisSession::new();
    let request = AnalysisRequest::pairwise(AnalysisKind::TopicSimilarity, "a", "b");

    match run_analysis(&session, &ctx, &request).await.unwrap() {
        AnalysisReport::Detailed { basic, .. } => {
            assert_eq!(basic, "Highly related topics.");
        }
        other => panic!("unexpected report shape: {:?}", other),
    }
}
