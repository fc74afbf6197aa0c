//! The progress monitor task.
//!
//! One [`ProgressMonitor`] runs alongside the fetchers of a transfer. On a
//! fixed interval it samples the shared byte counter, repositions the
//! progress line, and terminates, exactly once, after rendering the final
//! 100% state when the counter has reached the total length. It never writes
//! the counter.
//!
//! The monitor only ever sees totals of at least one byte: the engine
//! refuses zero-length transfers at probe time, before the monitor is
//! spawned. If a fetcher fails the counter can never reach the total, so the
//! orchestrator aborts the monitor task instead of joining it.

use crate::progress::style::ProgressBarOpts;

use indicatif::ProgressBar;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Samples the shared progress counter and renders one overwritten line.
pub struct ProgressMonitor {
    bar: ProgressBar,
    total_length: u64,
    counter: Arc<AtomicU64>,
    clear: bool,
}

impl ProgressMonitor {
    /// Create a monitor for a transfer of `total_length` bytes, reading from
    /// the given shared counter.
    pub fn new(opts: ProgressBarOpts, total_length: u64, counter: Arc<AtomicU64>) -> Self {
        let clear = opts.clear;
        Self {
            bar: opts.to_progress_bar(total_length),
            total_length,
            counter,
            clear,
        }
    }

    /// Spawn the sampling loop as its own task.
    ///
    /// The returned handle resolves once the counter has reached the total
    /// and the final state has been rendered.
    pub fn spawn(self, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(self.run(interval))
    }

    /// The sampling loop: tick, read the counter, reposition the line, exit
    /// once everything has arrived.
    pub async fn run(self, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let transferred = self.counter.load(Ordering::Relaxed);
            self.bar.set_position(transferred.min(self.total_length));
            if transferred >= self.total_length {
                break;
            }
        }

        self.bar.set_position(self.total_length);
        if self.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden_monitor(total: u64, counter: Arc<AtomicU64>) -> ProgressMonitor {
        ProgressMonitor::new(ProgressBarOpts::hidden(), total, counter)
    }

    #[tokio::test]
    async fn test_monitor_terminates_when_counter_reaches_total() {
        let counter = Arc::new(AtomicU64::new(0));
        let monitor = hidden_monitor(1000, Arc::clone(&counter));
        let handle = monitor.spawn(Duration::from_millis(5));

        counter.store(1000, Ordering::Relaxed);

        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("monitor should terminate once the counter reaches the total")
            .unwrap();
    }

    #[tokio::test]
    async fn test_monitor_keeps_running_while_incomplete() {
        let counter = Arc::new(AtomicU64::new(0));
        let monitor = hidden_monitor(1000, Arc::clone(&counter));
        let handle = monitor.spawn(Duration::from_millis(5));

        counter.store(999, Ordering::Relaxed);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!handle.is_finished());

        handle.abort();
    }

    #[tokio::test]
    async fn test_monitor_terminates_on_overshoot() {
        // The counter can land past the total when the final chunk straddles
        // it; the monitor must still come down.
        let counter = Arc::new(AtomicU64::new(0));
        let monitor = hidden_monitor(100, Arc::clone(&counter));
        let handle = monitor.spawn(Duration::from_millis(5));

        counter.store(250, Ordering::Relaxed);

        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("monitor should terminate on overshoot")
            .unwrap();
    }
}
