//! Data Models
//!
//! Request-scoped result models and application settings.

pub mod report;
pub mod settings;
pub mod structure;

pub use report::AnalysisReport;
pub use settings::{ApiSettings, AppConfig};
pub use structure::{ArgumentBreakdown, SimilarityCell, StructureReport, StructureSimilarity};
