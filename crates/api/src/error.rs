//! API Error Types
//!
//! Error taxonomy for remote analysis calls. Every failure of a remote call
//! falls into one of three buckets the pipelines care about: the request
//! never completed (network/transport), the response violated the envelope
//! contract (protocol), or the server explicitly declined to produce a
//! result (semantic).

use thiserror::Error;

/// Errors produced by the remote analysis API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or the response body could not be read
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-success HTTP status
    #[error("Transport error: HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    /// The response body was not valid JSON or did not follow the
    /// `{status, result}` envelope, or a payload had an unexpected shape
    #[error("Protocol error: {message}")]
    Protocol { message: String },

    /// The envelope reported failure or carried no result
    #[error("Analysis failed: {message}")]
    Semantic { message: String },
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
        }
    }

    /// Create a protocol error
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol {
            message: msg.into(),
        }
    }

    /// Create a semantic error
    pub fn semantic(msg: impl Into<String>) -> Self {
        Self::Semantic {
            message: msg.into(),
        }
    }
}
