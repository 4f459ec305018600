//! reqstats server library entry.
//!
//! Wires the core `Recorder` into axum: the stats middleware, the periodic
//! interval reset task, the ops endpoints, and strict YAML config. It is
//! intended to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod reset;
pub mod router;
