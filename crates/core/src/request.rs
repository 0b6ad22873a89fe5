//! Analysis Requests
//!
//! Request-scoped input for one analysis invocation, plus the validation
//! applied before any network call is dispatched. Validation failures are
//! surfaced to the user immediately and the pipeline is never started.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::{CoreError, CoreResult};
use crate::kind::AnalysisKind;

/// Maximum accepted length of a single input text, in characters.
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Compiled once; matches embedded `<script>...</script>` markup.
fn script_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?is)<script\b.*?</script>").expect("script pattern compiles")
    })
}

/// One analysis invocation's input. Created at submission time and discarded
/// when the next submission replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// First input text (the only one for single-text kinds)
    pub text1: String,
    /// Second input text (ignored by single-text kinds)
    #[serde(default)]
    pub text2: String,
    /// Explicit topic for stance classification; when absent, topics are
    /// extracted from the argument instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Selected analysis kind
    pub kind: AnalysisKind,
}

impl AnalysisRequest {
    /// Build a request for a two-text analysis.
    pub fn pairwise(kind: AnalysisKind, text1: impl Into<String>, text2: impl Into<String>) -> Self {
        Self {
            text1: text1.into(),
            text2: text2.into(),
            topic: None,
            kind,
        }
    }

    /// Build a request for a single-text analysis.
    pub fn single(kind: AnalysisKind, text1: impl Into<String>) -> Self {
        Self {
            text1: text1.into(),
            text2: String::new(),
            topic: None,
            kind,
        }
    }

    /// Attach an explicit topic.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// The explicit topic, trimmed, if one was supplied and is non-empty.
    pub fn explicit_topic(&self) -> Option<&str> {
        self.topic
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Validate the request before dispatch.
    ///
    /// Checks, per input field the kind actually uses: non-empty after
    /// trimming, at most [`MAX_TEXT_LENGTH`] characters, and free of script
    /// markup. A supplied topic must itself be non-empty after trimming.
    pub fn validate(&self) -> CoreResult<()> {
        if self.kind.requires_second_text() {
            if self.text1.trim().is_empty() || self.text2.trim().is_empty() {
                return Err(CoreError::validation(
                    "Please provide text in both input fields",
                ));
            }
            validate_text(&self.text1)?;
            validate_text(&self.text2)?;
        } else {
            if self.text1.trim().is_empty() {
                return Err(CoreError::validation("Please provide a text to analyze"));
            }
            validate_text(&self.text1)?;
        }

        if let Some(topic) = &self.topic {
            if topic.trim().is_empty() {
                return Err(CoreError::validation("The provided topic is empty"));
            }
        }

        Ok(())
    }
}

/// Shared per-field checks: length cap and script-markup guard.
///
/// This is a client-side guard only, not a security boundary enforced by
/// the server.
fn validate_text(text: &str) -> CoreResult<()> {
    if text.chars().count() > MAX_TEXT_LENGTH {
        return Err(CoreError::validation(format!(
            "Text is too long (maximum {} characters)",
            MAX_TEXT_LENGTH
        )));
    }
    if script_pattern().is_match(text) {
        return Err(CoreError::validation("HTML/Script tags are not allowed"));
    }
    Ok(())
}
