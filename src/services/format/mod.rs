//! Result Formatters
//!
//! Pure transformations from endpoint payloads to presentable values. None
//! of these fail: missing optional fields render as explicit placeholders.

pub mod global;
pub mod reasoning;
pub mod similarity;
pub mod stance;
pub mod structure;
pub mod topic;

pub use global::{format_global, GlobalMetrics, FAILURE_PLACEHOLDER};
pub use reasoning::format_reasoning;
pub use similarity::format_similarity;
pub use stance::{format_stance, format_stance_entries};
pub use structure::render_structure;
pub use topic::format_topic_similarity;
