//! Axum router wiring.
//!
//! `build_router` mounts only the ops endpoints; `with_stats` wraps any router
//! (application routes included) in the stats middleware.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, config::schema::HEALTHZ_PATH, obs, ops};

pub fn build_router(state: AppState) -> Router {
    with_stats(Router::new(), state)
}

/// Add the ops endpoints to `app` and record every response it produces.
pub fn with_stats(app: Router<AppState>, state: AppState) -> Router {
    let stats_path = state.cfg().server.stats_path.clone();
    app.route(HEALTHZ_PATH, get(ops::healthz))
        .route(&stats_path, get(ops::stats))
        .layer(middleware::from_fn_with_state(state.clone(), obs::track_stats))
        .with_state(state)
}
