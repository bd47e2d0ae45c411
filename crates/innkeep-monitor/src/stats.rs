use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::observer::{VacancyObserver, VacancyReport};

/// Default number of samples kept by [`VacancyHistory`].
pub const DEFAULT_HISTORY_LEN: usize = 20;

/// One recorded scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VacancySample {
    pub sampled_at: DateTime<Utc>,
    pub capacity: usize,
    pub vacant: usize,
}

impl VacancySample {
    pub fn occupied(&self) -> usize {
        self.capacity.saturating_sub(self.vacant)
    }
}

/// Bounded in-memory history of monitor scans. Keeps the last `limit`
/// samples, evicting the oldest.
#[derive(Debug)]
pub struct VacancyHistory {
    limit: usize,
    samples: Mutex<VecDeque<VacancySample>>,
}

impl Default for VacancyHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LEN)
    }
}

impl VacancyHistory {
    /// A `limit` of zero is raised to one.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            limit,
            samples: Mutex::new(VecDeque::with_capacity(limit)),
        }
    }

    fn samples(&self) -> MutexGuard<'_, VecDeque<VacancySample>> {
        self.samples.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record(&self, sample: VacancySample) {
        let mut samples = self.samples();
        samples.push_back(sample);
        while samples.len() > self.limit {
            samples.pop_front(); // Remove oldest
        }
    }

    pub fn len(&self) -> usize {
        self.samples().len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples().is_empty()
    }

    pub fn latest(&self) -> Option<VacancySample> {
        self.samples().back().copied()
    }

    /// Oldest first.
    pub fn snapshot(&self) -> Vec<VacancySample> {
        self.samples().iter().copied().collect()
    }

    /// Fewest vacant rooms seen across the kept samples.
    pub fn min_vacant(&self) -> Option<usize> {
        self.samples().iter().map(|s| s.vacant).min()
    }

    /// P95 of occupied-room counts across the kept samples.
    /// Returns None if nothing has been recorded.
    pub fn p95_occupied(&self) -> Option<usize> {
        let mut sorted: Vec<usize> = self.samples().iter().map(VacancySample::occupied).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_unstable();

        let idx = ((sorted.len() as f64) * 0.95).ceil() as usize;
        let idx = idx.min(sorted.len()).saturating_sub(1);
        Some(sorted[idx])
    }
}

impl VacancyObserver for VacancyHistory {
    fn observe(&self, report: &VacancyReport) {
        self.record(VacancySample {
            sampled_at: report.sampled_at,
            capacity: report.capacity,
            vacant: report.vacant.len(),
        });
    }
}
