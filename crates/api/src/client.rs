//! Remote Analysis API Client
//!
//! Issues JSON-over-POST requests to the analysis service and applies the
//! envelope contract: non-2xx responses are transport failures, bodies that
//! do not parse as an envelope are protocol failures, and envelopes without
//! a successful result are semantic failures. No retries; a failed call
//! aborts only the portion of a pipeline that depends on it.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

use crate::endpoints::Endpoint;
use crate::envelope::RemoteEnvelope;
use crate::error::{ApiError, ApiResult};
use crate::http::build_http_client;
use crate::types::{
    CompareResult, PremiseClaimResult, ReasoningResult, StanceResult, TopicExtraction,
    TopicSimilarityResult,
};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client for the remote analysis service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with an explicit per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: build_http_client(timeout),
            base_url,
        }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body to an endpoint and unwrap the response envelope.
    ///
    /// Returns the kind-specific `result` payload as opaque JSON.
    pub async fn post(&self, endpoint: Endpoint, body: &Value) -> ApiResult<Value> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        debug!(endpoint = %endpoint, "dispatching analysis request");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status().as_u16();
        let body_text = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        if !(200..300).contains(&status) {
            warn!(endpoint = %endpoint, status, "analysis request failed");
            return Err(ApiError::Transport {
                status,
                body: body_text,
            });
        }

        let envelope: RemoteEnvelope = serde_json::from_str(&body_text).map_err(|e| {
            ApiError::protocol(format!("{}: invalid response envelope: {}", endpoint, e))
        })?;

        envelope.into_result()
    }

    /// Overall + per-feature similarity between two texts.
    pub async fn compare(&self, text1: &str, text2: &str) -> ApiResult<CompareResult> {
        let payload = self
            .post(Endpoint::Compare, &json!({"text1": text1, "text2": text2}))
            .await?;
        decode(Endpoint::Compare, payload)
    }

    /// Candidate topics for one text.
    pub async fn extract_topics(&self, text: &str) -> ApiResult<TopicExtraction> {
        let payload = self
            .post(Endpoint::ExtractTopics, &json!({"text": text}))
            .await?;
        decode(Endpoint::ExtractTopics, payload)
    }

    /// Stance of an argument with respect to a topic.
    pub async fn classify_stance(&self, text: &str, topic: &str) -> ApiResult<StanceResult> {
        let payload = self
            .post(
                Endpoint::StanceClassification,
                &json!({"text": text, "topic": topic}),
            )
            .await?;
        decode(Endpoint::StanceClassification, payload)
    }

    /// Ranked topic-pair comparison between two texts. `llm` selects the
    /// LLM-based endpoint variant over the topic-model one.
    pub async fn topic_similarity(
        &self,
        text1: &str,
        text2: &str,
        llm: bool,
    ) -> ApiResult<TopicSimilarityResult> {
        let endpoint = if llm {
            Endpoint::TopicSimilarityLlm
        } else {
            Endpoint::TopicSimilarity
        };
        let payload = self
            .post(endpoint, &json!({"text1": text1, "text2": text2}))
            .await?;
        decode(endpoint, payload)
    }

    /// Reasoning-type label + justification for one text.
    pub async fn classify_reasoning(&self, text: &str) -> ApiResult<ReasoningResult> {
        let payload = self
            .post(Endpoint::ReasoningTypeClassification, &json!({"text": text}))
            .await?;
        decode(Endpoint::ReasoningTypeClassification, payload)
    }

    /// Premise/claim decomposition of one text.
    pub async fn extract_premise_claim(&self, text: &str) -> ApiResult<PremiseClaimResult> {
        let payload = self
            .post(Endpoint::ExtractPremiseClaim, &json!({"text": text}))
            .await?;
        decode(Endpoint::ExtractPremiseClaim, payload)
    }
}

/// Decode an opaque payload into its endpoint-specific shape.
fn decode<T: DeserializeOwned>(endpoint: Endpoint, payload: Value) -> ApiResult<T> {
    serde_json::from_value(payload)
        .map_err(|e| ApiError::protocol(format!("{}: unexpected payload shape: {}", endpoint, e)))
}
