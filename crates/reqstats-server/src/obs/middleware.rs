use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Count the response status and latency of every request.
///
/// Mount with `axum::middleware::from_fn_with_state`.
pub async fn track_stats(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let recorder = state.recorder();
    let mut inflight = recorder.begin();

    let response = next.run(req).await;

    inflight.set_status(response.status().as_u16());
    tracing::trace!(
        status = inflight.status(),
        elapsed_us = inflight.started().elapsed().as_micros() as u64,
        "request recorded"
    );
    recorder.end(inflight);

    response
}
