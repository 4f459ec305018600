//! Response recorder.
//!
//! One `RwLock` guards one `Counters` aggregate: interval counts, total counts,
//! and accumulated response time always change together. Increments and resets
//! take the write side, snapshots take the read side and copy out before any
//! formatting happens.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::duration::duration_from_nanos;
use crate::snapshot::Snapshot;

/// Status recorded when the downstream handler never sets one.
pub const DEFAULT_STATUS: u16 = 200;

#[derive(Debug, Default)]
struct Counters {
    /// Responses since the last interval reset, keyed by status code.
    interval: HashMap<String, u64>,
    /// Responses since the recorder was created. Never reset.
    total: HashMap<String, u64>,
    /// Sum of all observed latencies, in nanoseconds.
    total_response_nanos: u128,
}

/// A request between `begin` and `end`.
#[derive(Debug, Clone, Copy)]
pub struct InFlight {
    started: Instant,
    status: u16,
}

impl InFlight {
    pub fn started(&self) -> Instant {
        self.started
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Overwrite the status that `end` will record.
    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }
}

/// Process-scoped response recorder. Share it as `Arc<Recorder>`.
#[derive(Debug)]
pub struct Recorder {
    started_at: Instant,
    pid: u32,
    counters: RwLock<Counters>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    /// Empty recorder. The periodic interval reset is driven externally
    /// (see `reqstats_server::reset::spawn_reset_task`).
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            pid: std::process::id(),
            counters: RwLock::new(Counters::default()),
        }
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Start timing a request. Status defaults to 200 until the handler says otherwise.
    pub fn begin(&self) -> InFlight {
        InFlight {
            started: Instant::now(),
            status: DEFAULT_STATUS,
        }
    }

    /// Finish a request with whatever status its handle carries.
    pub fn end(&self, inflight: InFlight) {
        self.end_with_status(inflight.started, inflight.status);
    }

    /// Finish a request with an explicit status.
    pub fn end_with_status(&self, started: Instant, status: u16) {
        self.record(status, started.elapsed());
    }

    /// Count one response with the given status and latency.
    pub fn record(&self, status: u16, elapsed: Duration) {
        let key = status.to_string();
        let mut c = self.write();
        *c.interval.entry(key.clone()).or_insert(0) += 1;
        *c.total.entry(key).or_insert(0) += 1;
        c.total_response_nanos = c.total_response_nanos.saturating_add(elapsed.as_nanos());
    }

    /// Drop the interval counts. Totals and response time are untouched.
    /// Returns how many responses the cleared interval held.
    pub fn reset_interval_counts(&self) -> u64 {
        let mut c = self.write();
        let cleared = std::mem::take(&mut c.interval);
        cleared.values().sum()
    }

    /// Point-in-time copy of the recorder state.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_at(Local::now())
    }

    /// Same as `snapshot`, with the wall-clock time supplied by the caller.
    pub fn snapshot_at(&self, now: DateTime<Local>) -> Snapshot {
        let (interval, total, total_response_nanos) = {
            let c = self.read();
            (
                c.interval.clone(),
                c.total.clone(),
                c.total_response_nanos,
            )
        };
        let uptime = self.uptime();

        let count: u64 = interval.values().sum();
        let total_count: u64 = total.values().sum();

        // Integer division on nanoseconds: the remainder is truncated.
        let average_nanos = if total_count > 0 {
            total_response_nanos / total_count as u128
        } else {
            0
        };

        Snapshot::build(
            self.pid,
            uptime,
            now,
            interval.into_iter().collect(),
            total.into_iter().collect(),
            count,
            total_count,
            duration_from_nanos(total_response_nanos),
            duration_from_nanos(average_nanos),
        )
    }

    // Critical sections never leave `Counters` half-updated, so a poisoned
    // lock still holds consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Counters> {
        self.counters.read().unwrap_or_else(|e| {
            tracing::warn!("counter lock poisoned, recovering");
            e.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Counters> {
        self.counters.write().unwrap_or_else(|e| {
            tracing::warn!("counter lock poisoned, recovering");
            e.into_inner()
        })
    }
}
