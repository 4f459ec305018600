//! reqstats demo server.
//!
//! Serves a couple of demo routes plus the ops endpoints, all behind the stats
//! middleware:
//! - `/`              : 200 "ok"
//! - `/status/:code`  : responds with the requested status code
//! - `/healthz`       : liveness
//! - `/stats`         : JSON snapshot (path configurable)
//!
//! Usage: `reqstats-server [config.yaml]` (default `reqstats.yaml`).

use std::path::Path;
use std::sync::Arc;

use axum::{extract::Path as UrlPath, http::StatusCode, routing::get, Router};
use tracing_subscriber::{fmt, EnvFilter};

use reqstats_core::{error::Result, Recorder};
use reqstats_server::{app_state::AppState, config, reset, router};

const DEFAULT_CONFIG: &str = "reqstats.yaml";

async fn index() -> &'static str {
    "ok"
}

async fn status(UrlPath(code): UrlPath<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

fn load_config() -> Result<config::ServerConfig> {
    match std::env::args().nth(1) {
        Some(path) => config::load_from_file(&path),
        None if Path::new(DEFAULT_CONFIG).exists() => config::load_from_file(DEFAULT_CONFIG),
        None => {
            tracing::info!("no {DEFAULT_CONFIG} found, using defaults");
            Ok(config::ServerConfig::default())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler failed");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = load_config()?;
    let listen = cfg.server.listen_addr()?;

    let recorder = Arc::new(Recorder::new());
    let reset_task = reset::spawn_reset_task(Arc::clone(&recorder));

    let state = AppState::new(cfg, recorder);
    let app = router::with_stats(
        Router::new()
            .route("/", get(index))
            .route("/status/:code", get(status))
            .fallback(not_found),
        state.clone(),
    );

    tracing::info!(%listen, pid = state.recorder().pid(), stats_path = %state.cfg().server.stats_path, "reqstats-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    reset_task.shutdown().await;
    tracing::info!("reqstats-server stopped");
    Ok(())
}
