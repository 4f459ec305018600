//! Periodic interval reset.
//!
//! One task per recorder clears the interval counts immediately and then about
//! once per second. Ticks are plain `tokio::time::interval` ticks: a late tick
//! is delayed, never compensated. The task stops when its `ResetTask` handle
//! is shut down or dropped.

use std::sync::Arc;
use std::time::Duration;

use reqstats_core::Recorder;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Fixed length of the interval window.
pub const RESET_INTERVAL: Duration = Duration::from_secs(1);

/// Owned handle to a running reset task.
#[derive(Debug)]
pub struct ResetTask {
    stop: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl ResetTask {
    /// Stop the task and wait for it to exit.
    pub async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Err(e) = (&mut self.handle).await {
            tracing::warn!(error = %e, "reset task ended abnormally");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Start resetting `recorder`'s interval counts every `RESET_INTERVAL`.
///
/// Must be called from within a tokio runtime.
pub fn spawn_reset_task(recorder: Arc<Recorder>) -> ResetTask {
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(RESET_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // A send and a dropped sender both mean stop.
                _ = &mut stop_rx => break,
                _ = ticker.tick() => {
                    let cleared = recorder.reset_interval_counts();
                    tracing::trace!(cleared, "interval counts reset");
                }
            }
        }
        tracing::debug!("reset task stopped");
    });

    ResetTask {
        stop: Some(stop_tx),
        handle,
    }
}
