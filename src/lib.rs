//! Arg Lens
//!
//! Client application for a remote argumentation-analysis service. It
//! collects one or two texts, runs the selected analysis pipeline against
//! the service's JSON-over-POST endpoints, and renders the formatted
//! result. It includes:
//! - Per-kind analysis pipelines (single calls, dependent chains, fan-out)
//! - Pure result formatters
//! - Session state with a stale-response guard
//! - Configuration loading and a terminal front end

pub mod cli;
pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

pub use commands::run_analysis;
pub use models::{AnalysisReport, AppConfig};
pub use services::{dispatch, PipelineContext};
pub use state::{AnalysisSession, Generation};
pub use storage::ConfigService;
pub use utils::error::{AppError, AppResult};
