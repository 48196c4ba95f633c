use crate::models::predict_types::AnalysisReport;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Explicit UI-facing session state: the in-flight flag and the last
/// completed report. At most one request's result is held at a time.
#[derive(Clone)]
pub struct AnalysisSession {
    in_flight: Arc<AtomicBool>,
    last_report: Arc<Mutex<Option<AnalysisReport>>>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self {
            in_flight: Arc::new(AtomicBool::new(false)),
            last_report: Arc::new(Mutex::new(None)),
        }
    }

    /// Claims the in-flight slot. Returns false if an analysis is already
    /// running, so overlapping invocations never race on the result.
    pub fn try_begin(&self) -> bool {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub fn finish(&self) {
        self.in_flight.store(false, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub async fn clear_report(&self) {
        *self.last_report.lock().await = None;
    }

    pub async fn store_report(&self, report: AnalysisReport) {
        *self.last_report.lock().await = Some(report);
    }

    pub async fn last_report(&self) -> Option<AnalysisReport> {
        self.last_report.lock().await.clone()
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}
