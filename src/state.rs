//! Application State
//!
//! The single "current result" and "is loading" flags, overwritten wholesale
//! on each new submission. In-flight calls are never aborted; instead a
//! monotonic generation counter guards the displayed state: a completion
//! whose generation is no longer current is discarded, never merged.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::AnalysisReport;

/// Token identifying one submission. Checked before committing results.
#[derive(Debug, Clone)]
pub struct Generation {
    id: u64,
    counter: Arc<AtomicU64>,
}

impl Generation {
    /// Whether this submission is still the latest one.
    pub fn is_current(&self) -> bool {
        self.counter.load(Ordering::SeqCst) == self.id
    }
}

/// Holds the displayed analysis state across submissions.
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    generation: Arc<AtomicU64>,
    loading: Arc<AtomicBool>,
    current: Arc<RwLock<Option<AnalysisReport>>>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new submission: bump the generation (invalidating any
    /// in-flight one), set the loading flag, and clear the result area.
    pub async fn begin(&self) -> Generation {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.loading.store(true, Ordering::SeqCst);
        *self.current.write().await = None;
        Generation {
            id,
            counter: Arc::clone(&self.generation),
        }
    }

    /// Commit a finished report. Returns false (and changes nothing) when a
    /// newer submission has started since this one began.
    pub async fn commit(&self, generation: &Generation, report: AnalysisReport) -> bool {
        if !generation.is_current() {
            return false;
        }
        *self.current.write().await = Some(report);
        self.loading.store(false, Ordering::SeqCst);
        true
    }

    /// Record a failed submission: the result area stays cleared and the
    /// loading flag is released, unless a newer submission took over.
    pub async fn fail(&self, generation: &Generation) -> bool {
        if !generation.is_current() {
            return false;
        }
        *self.current.write().await = None;
        self.loading.store(false, Ordering::SeqCst);
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// The currently displayed report, if any.
    pub async fn current(&self) -> Option<AnalysisReport> {
        self.current.read().await.clone()
    }
}
