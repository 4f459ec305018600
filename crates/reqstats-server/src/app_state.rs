//! Shared application state for the reqstats server.

use std::sync::Arc;

use reqstats_core::Recorder;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<ServerConfig>,
    recorder: Arc<Recorder>,
}

impl AppState {
    /// The recorder is passed in so callers decide who owns the reset task.
    pub fn new(cfg: ServerConfig, recorder: Arc<Recorder>) -> Self {
        Self {
            cfg: Arc::new(cfg),
            recorder,
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.cfg
    }

    pub fn recorder(&self) -> Arc<Recorder> {
        Arc::clone(&self.recorder)
    }
}
