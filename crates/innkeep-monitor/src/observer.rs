use chrono::{DateTime, Utc};
use innkeep_core::RoomId;
use innkeep_pool::{PoolStatus, RoomPool, format_vacancy_report};
use serde::Serialize;
use std::sync::Arc;

/// Result of one availability scan.
#[derive(Debug, Clone, Serialize)]
pub struct VacancyReport {
    pub sampled_at: DateTime<Utc>,
    pub capacity: usize,
    pub vacant: Vec<RoomId>,
}

impl VacancyReport {
    /// Scan `pool` now. The vacancy list is a non-atomic snapshot.
    pub fn capture(pool: &RoomPool) -> Self {
        Self {
            sampled_at: Utc::now(),
            capacity: pool.len(),
            vacant: pool.scan_vacant(),
        }
    }

    pub fn status(&self) -> PoolStatus {
        PoolStatus {
            capacity: self.capacity,
            occupied: self.capacity.saturating_sub(self.vacant.len()),
        }
    }

    pub fn is_full(&self) -> bool {
        self.vacant.is_empty()
    }

    pub fn summary(&self) -> String {
        format_vacancy_report(&self.status(), &self.vacant)
    }
}

/// Receives every report produced by the availability monitor.
///
/// Called from the monitor's task; implementations should return quickly.
pub trait VacancyObserver: Send + Sync {
    fn observe(&self, report: &VacancyReport);
}

impl<F> VacancyObserver for F
where
    F: Fn(&VacancyReport) + Send + Sync,
{
    fn observe(&self, report: &VacancyReport) {
        self(report)
    }
}

/// Logs each report through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl VacancyObserver for TracingObserver {
    fn observe(&self, report: &VacancyReport) {
        if report.is_full() {
            tracing::warn!(capacity = report.capacity, "no vacant rooms");
            return;
        }
        tracing::info!(
            vacant = report.vacant.len(),
            capacity = report.capacity,
            "{}",
            report.summary()
        );
    }
}

/// Forwards each report to several observers, in order.
#[derive(Default, Clone)]
pub struct FanoutObserver {
    observers: Vec<Arc<dyn VacancyObserver>>,
}

impl FanoutObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, observer: Arc<dyn VacancyObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl VacancyObserver for FanoutObserver {
    fn observe(&self, report: &VacancyReport) {
        for observer in &self.observers {
            observer.observe(report);
        }
    }
}
