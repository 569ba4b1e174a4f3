use std::{sync::Arc, time::Duration};

use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info};

use super::{clock::Clock, portfolio_tracker_service::PortfolioTrackerService};

/// Re-runs the tracker's refresh on a fixed interval until stopped.
///
/// Stopping prevents future cycles only. A cycle already in flight is left to
/// finish on its own.
pub struct RefreshScheduler {
    tracker: Arc<PortfolioTrackerService>,
    clock: Arc<dyn Clock>,
    interval: Duration,
    running: Option<(watch::Sender<bool>, JoinHandle<()>)>,
}

impl RefreshScheduler {
    pub fn new(
        tracker: Arc<PortfolioTrackerService>,
        clock: Arc<dyn Clock>,
        interval: Duration,
    ) -> Self {
        Self {
            tracker,
            clock,
            interval,
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let (stop_tx, mut stop_rx) = watch::channel(false);
        let tracker = Arc::clone(&self.tracker);
        let clock = Arc::clone(&self.clock);
        let interval = self.interval;

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    changed = stop_rx.changed() => {
                        if changed.is_err() || *stop_rx.borrow() {
                            break;
                        }
                    }
                    _ = clock.sleep(interval) => {
                        let report = tracker.refresh().await;
                        debug!(?report, "scheduled refresh done");
                    }
                }
            }
            debug!("refresh scheduler loop exited");
        });

        info!(interval_secs = interval.as_secs(), "periodic refresh started");
        self.running = Some((stop_tx, handle));
    }

    pub fn stop(&mut self) {
        if let Some((stop_tx, _handle)) = self.running.take() {
            let _ = stop_tx.send(true);
            info!("periodic refresh stopped");
        }
    }

    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
        self.is_running()
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
