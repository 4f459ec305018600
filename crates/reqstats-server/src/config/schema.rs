use std::net::SocketAddr;

use serde::Deserialize;
use reqstats_core::error::{Result, StatsError};

/// Path reserved for the liveness probe.
pub const HEALTHZ_PATH: &str = "/healthz";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(StatsError::UnsupportedVersion);
        }
        self.server.validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_stats_path")]
    pub stats_path: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            stats_path: default_stats_path(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.stats_path.starts_with('/') {
            return Err(StatsError::BadConfig(
                "server.stats_path must start with '/'".into(),
            ));
        }
        if self.stats_path == HEALTHZ_PATH {
            return Err(StatsError::BadConfig(format!(
                "server.stats_path must not be {HEALTHZ_PATH}"
            )));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            StatsError::BadConfig(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_stats_path() -> String {
    "/stats".into()
}
