//! Command Facade Integration Tests
//!
//! Validation short-circuits and session state behavior of `run_analysis`.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use arg_lens::{run_analysis, AnalysisReport, AnalysisSession, AppError, PipelineContext};
use arg_lens_api::ApiClient;
use arg_lens_core::{AnalysisKind, AnalysisRequest, MAX_TEXT_LENGTH};

#[tokio::test]
async fn test_validation_failure_makes_no_network_call() {
    let server = MockServer::start().await;
    // Any request reaching the server would fail the expectation
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let ctx = PipelineContext::new(&client);
    let session = AnalysisSession::new();

    let request = AnalysisRequest::pairwise(AnalysisKind::TextSimilarity, "  ", "b");
    let err = run_analysis(&session, &ctx, &request).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_oversized_input_rejected_before_dispatch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let ctx = PipelineContext::new(&client);
    let session = AnalysisSession::new();

    let request = AnalysisRequest::pairwise(
        AnalysisKind::TextSimilarity,
        "a".repeat(MAX_TEXT_LENGTH + 1),
        "b",
    );
    let err = run_analysis(&session, &ctx, &request).await.unwrap_err();
    assert!(err.to_string().contains("too long"));
}

#[tokio::test]
async fn test_script_markup_rejected_before_dispatch() {
    let server = MockServer::start().await;
    let client = ApiClient::new(server.uri());
    let ctx = PipelineContext::new(&client);
    let session = AnalysisSession::new();

    let request = AnalysisRequest::pairwise(
        AnalysisKind::TextSimilarity,
        "<script>alert(1)</script>",
        "b",
    );
    let err = run_analysis(&session, &ctx, &request).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_successful_run_commits_to_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reasoning-type-classification"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "result": {"reasoning_type": "Analogical", "justification": "Argues by analogy."}
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let ctx = PipelineContext::new(&client);
    let session = AnalysisSession::new();

    let request =
        AnalysisRequest::single(AnalysisKind::ReasoningTypeClassification, "like a household");
    let report = run_analysis(&session, &ctx, &request).await.unwrap();
    assert_eq!(
        report,
        AnalysisReport::plain("Reasoning Type: Analogical\nArgues by analogy.")
    );
    assert_eq!(session.current().await, Some(report));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_superseded_run_does_not_touch_displayed_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reasoning-type-classification"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "result": {"reasoning_type": "Causal", "justification": ""}
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let ctx = PipelineContext::new(&client);
    let session = AnalysisSession::new();
    let request = AnalysisRequest::single(AnalysisKind::ReasoningTypeClassification, "because");

    // A newer submission starts while the first is in flight
    let first = {
        let session = session.clone();
        let client = client.clone();
        let request = request.clone();
        tokio::spawn(async move {
            let ctx = PipelineContext::new(&client);
            run_analysis(&session, &ctx, &request).await
        })
    };
    let newer = session.begin().await;

    // The spawned run still returns its report but must not have committed
    let report = first.await.unwrap().unwrap();
    assert_eq!(report, AnalysisReport::plain("Reasoning Type: Causal"));
    if newer.is_current() {
        assert!(session.current().await.is_none());
        assert!(session.is_loading());
    }

    // The newer submission can still commit normally
    let report = run_analysis(&session, &ctx, &request).await.unwrap();
    assert_eq!(session.current().await, Some(report));
}
