//! Operational HTTP endpoints.
//!
//! - `/healthz`     : liveness
//! - `<stats_path>` : JSON snapshot of the recorder (default `/stats`)

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use reqstats_core::Snapshot;

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn stats(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.recorder().snapshot())
}
