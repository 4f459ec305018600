//! Request observation.
//!
//! Every request passes through `track_stats`, which brackets the inner
//! service with `Recorder::begin` / `Recorder::end`.

pub mod middleware;

pub use middleware::track_stats;
