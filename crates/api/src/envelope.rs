//! Response Envelope
//!
//! Every remote endpoint answers with the same wrapper:
//! `{"status": "success"|"error", "result"?: <payload>}`. The payload stays
//! opaque (`serde_json::Value`) at this layer; typed decoding happens in the
//! per-endpoint client wrappers.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// The `{status, result}` wrapper every response is expected to follow.
#[derive(Debug, Deserialize)]
pub struct RemoteEnvelope {
    pub status: String,
    #[serde(default)]
    pub result: Option<Value>,
    /// Optional server-side explanation accompanying an error status
    #[serde(default)]
    pub message: Option<String>,
}

impl RemoteEnvelope {
    /// Unwrap the envelope into its result payload.
    ///
    /// A non-`success` status or a missing `result` means the server
    /// explicitly rejected or could not produce a result.
    pub fn into_result(self) -> ApiResult<Value> {
        if self.status != "success" {
            let message = self
                .message
                .unwrap_or_else(|| format!("server reported status '{}'", self.status));
            return Err(ApiError::semantic(message));
        }
        self.result
            .ok_or_else(|| ApiError::semantic("success envelope carried no result"))
    }
}
