//! Arg Lens Core
//!
//! Foundational types for the Arg Lens workspace: the closed set of analysis
//! kinds, the request type with its pre-dispatch validation, and the core
//! error type. This crate has zero dependencies on application-level code
//! (HTTP client, pipelines, CLI).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `kind` - The analysis-kind enumeration (`AnalysisKind`)
//! - `request` - Request input and validation (`AnalysisRequest`)

pub mod error;
pub mod kind;
pub mod request;

pub use error::{CoreError, CoreResult};
pub use kind::AnalysisKind;
pub use request::{AnalysisRequest, MAX_TEXT_LENGTH};
