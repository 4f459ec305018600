//! Serializable point-in-time view of a `Recorder`.
//!
//! Field names are a stable external contract: stats endpoints render this
//! struct as JSON directly.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::duration::format_duration;

/// Wall-clock rendering for the `time` field.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub pid: u32,
    pub uptime: String,
    pub uptime_sec: f64,
    pub time: String,
    pub unixtime: i64,
    pub status_code_count: BTreeMap<String, u64>,
    pub total_status_code_count: BTreeMap<String, u64>,
    pub count: u64,
    pub total_count: u64,
    pub total_response_time: String,
    pub total_response_time_sec: f64,
    pub average_response_time: String,
    pub average_response_time_sec: f64,
}

impl Snapshot {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn build(
        pid: u32,
        uptime: Duration,
        now: DateTime<Local>,
        status_code_count: BTreeMap<String, u64>,
        total_status_code_count: BTreeMap<String, u64>,
        count: u64,
        total_count: u64,
        total_response_time: Duration,
        average_response_time: Duration,
    ) -> Self {
        Self {
            pid,
            uptime: format_duration(uptime),
            uptime_sec: uptime.as_secs_f64(),
            time: now.format(TIME_FORMAT).to_string(),
            unixtime: now.timestamp(),
            status_code_count,
            total_status_code_count,
            count,
            total_count,
            total_response_time: format_duration(total_response_time),
            total_response_time_sec: total_response_time.as_secs_f64(),
            average_response_time: format_duration(average_response_time),
            average_response_time_sec: average_response_time.as_secs_f64(),
        }
    }

    /// Interval count for one status code (0 when absent).
    pub fn interval(&self, status: u16) -> u64 {
        self.status_code_count
            .get(&status.to_string())
            .copied()
            .unwrap_or(0)
    }

    /// Cumulative count for one status code (0 when absent).
    pub fn total(&self, status: u16) -> u64 {
        self.total_status_code_count
            .get(&status.to_string())
            .copied()
            .unwrap_or(0)
    }
}
