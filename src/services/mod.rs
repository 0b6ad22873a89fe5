//! Services
//!
//! Business logic: the per-kind analysis pipelines and the pure result
//! formatters they feed.

pub mod format;
pub mod pipeline;

pub use pipeline::{dispatch, PipelineContext};
