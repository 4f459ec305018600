//! reqstats core: the in-memory request recorder and its snapshot type.
//!
//! This crate counts responses by status code, keeps interval and cumulative
//! totals, and accumulates response latency. It intentionally carries no
//! transport or runtime dependencies: the periodic interval reset and the HTTP
//! middleware live in `reqstats-server`.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Recorder operations are total; only configuration paths return `StatsError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod duration;
pub mod error;
pub mod recorder;
pub mod snapshot;

/// Shared result type.
pub use error::{Result, StatsError};
pub use recorder::{InFlight, Recorder};
pub use snapshot::Snapshot;
