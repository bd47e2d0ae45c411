use innkeep_pool::RoomPool;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::observer::{VacancyObserver, VacancyReport};

/// Smallest interval the monitor will tick at.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Largest interval the monitor will tick at (one week).
pub const MAX_INTERVAL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Periodically scans a shared pool for vacant rooms.
/// Each scan is handed to the injected [`VacancyObserver`].
///
/// Must be started from within a tokio runtime. Stopping is cooperative:
/// the task exits at its next wait point, before the next tick fires, but a
/// scan already in progress runs to completion. Dropping the handle without
/// calling [`stop`](Self::stop) also cancels the task.
pub struct AvailabilityMonitor {
    shutdown: DropGuard,
    handle: JoinHandle<usize>,
}

impl std::fmt::Debug for AvailabilityMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvailabilityMonitor")
            .field("running", &self.is_running())
            .finish()
    }
}

impl AvailabilityMonitor {
    /// Start scanning `pool` every `interval`. The first scan happens one
    /// full interval after start. `interval` is clamped to
    /// `1ms..=`[`MAX_INTERVAL`].
    pub fn start(
        pool: Arc<RoomPool>,
        interval: Duration,
        observer: Arc<dyn VacancyObserver>,
    ) -> Self {
        let interval = interval.clamp(MIN_INTERVAL, MAX_INTERVAL);
        let shutdown = CancellationToken::new();
        let task_shutdown = shutdown.clone();

        tracing::debug!(?interval, rooms = pool.len(), "starting availability monitor");
        let handle = tokio::spawn(run_scan_loop(pool, interval, observer, task_shutdown));

        Self {
            shutdown: shutdown.drop_guard(),
            handle,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Signal the task to stop and wait for it. Returns the number of
    /// completed scans.
    pub async fn stop(self) -> usize {
        let Self { shutdown, handle } = self;
        // Dropping the guard cancels the token.
        drop(shutdown);
        match handle.await {
            Ok(scans) => scans,
            Err(error) => {
                tracing::warn!(error = %error, "availability monitor task failed");
                0
            }
        }
    }
}

async fn run_scan_loop(
    pool: Arc<RoomPool>,
    interval: Duration,
    observer: Arc<dyn VacancyObserver>,
    shutdown: CancellationToken,
) -> usize {
    let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut scans = 0usize;

    loop {
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            _ = ticker.tick() => {
                let report = VacancyReport::capture(&pool);
                tracing::trace!(vacant = report.vacant.len(), "availability scan");
                observer.observe(&report);
                scans += 1;
            }
        }
    }

    tracing::debug!(scans, "availability monitor stopped");
    scans
}
