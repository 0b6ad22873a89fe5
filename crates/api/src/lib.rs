//! Arg Lens API
//!
//! Client for the remote argumentation-analysis service. All endpoints are
//! JSON-over-POST and answer with a `{status, result}` envelope; this crate
//! owns the endpoint map, the envelope rules, the error taxonomy for remote
//! calls, and typed decodings of each endpoint's payload.

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod http;
pub mod types;

// Re-export main types
pub use client::{ApiClient, DEFAULT_TIMEOUT_SECS};
pub use endpoints::Endpoint;
pub use envelope::RemoteEnvelope;
pub use error::{ApiError, ApiResult};
pub use http::build_http_client;
pub use types::{
    CompareResult, PremiseClaimResult, ReasoningResult, StanceResult, TopicExtraction,
    TopicPairScore, TopicSimilarityResult, TopicSimilarityStats,
};
