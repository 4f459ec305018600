//! End-to-end: a real axum server with the stats middleware, driven by reqwest.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::Path, http::StatusCode, routing::get, Router};
use reqstats_core::{Recorder, Snapshot};
use reqstats_server::{app_state::AppState, config, router};
use reqwest::Client;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

struct TestServer {
    addr: SocketAddr,
    recorder: Arc<Recorder>,
    shutdown: oneshot::Sender<()>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(self) {
        let _ = self.shutdown.send(());
        self.handle.await.unwrap();
    }
}

async fn spawn_server(cfg: config::ServerConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let recorder = Arc::new(Recorder::new());
    let state = AppState::new(cfg, Arc::clone(&recorder));
    let app = router::with_stats(
        Router::new()
            .route("/", get(|| async { "ok" }))
            .route("/status/:code", get(status))
            .fallback(not_found),
        state,
    );

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        let _ = shutdown_rx.await;
    });
    let handle = tokio::spawn(async move {
        server.await.expect("stats server failed");
    });

    TestServer { addr, recorder, shutdown: shutdown_tx, handle }
}

#[tokio::test]
async fn healthz_is_ok() {
    let srv = spawn_server(config::ServerConfig::default()).await;
    let resp = Client::new().get(srv.url("/healthz")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
    srv.stop().await;
}

#[tokio::test]
async fn responses_are_counted_by_status() {
    let srv = spawn_server(config::ServerConfig::default()).await;
    let client = Client::new();

    for path in ["/", "/", "/status/404"] {
        client.get(srv.url(path)).send().await.unwrap();
    }

    let snap: Snapshot = client.get(srv.url("/stats")).send().await.unwrap().json().await.unwrap();
    assert_eq!(snap.total_count, 3);
    assert_eq!(snap.total(200), 2);
    assert_eq!(snap.total(404), 1);
    assert_eq!(snap.pid, std::process::id());

    // the first stats request is itself counted once it completes
    let snap: Snapshot = client.get(srv.url("/stats")).send().await.unwrap().json().await.unwrap();
    assert_eq!(snap.total_count, 4);
    assert_eq!(snap.total(200), 3);

    srv.stop().await;
}

#[tokio::test]
async fn fallback_and_server_errors_are_counted() {
    let srv = spawn_server(config::ServerConfig::default()).await;
    let client = Client::new();

    let resp = client.get(srv.url("/no/such/route")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    let resp = client.get(srv.url("/status/503")).send().await.unwrap();
    assert_eq!(resp.status(), 503);

    let snap = srv.recorder.snapshot();
    assert_eq!(snap.total(404), 1);
    assert_eq!(snap.total(503), 1);
    assert_eq!(snap.total_count, 2);
    assert!(snap.total_response_time_sec > 0.0);

    srv.stop().await;
}

#[tokio::test]
async fn stats_json_has_contract_fields() {
    let srv = spawn_server(config::ServerConfig::default()).await;
    let client = Client::new();

    let v: serde_json::Value = client.get(srv.url("/stats")).send().await.unwrap().json().await.unwrap();
    assert_eq!(v["count"], 0);
    assert_eq!(v["total_count"], 0);
    assert_eq!(v["average_response_time"], "0s");
    assert_eq!(v["average_response_time_sec"], 0.0);
    assert!(v["status_code_count"].as_object().unwrap().is_empty());
    assert!(v["unixtime"].as_i64().unwrap() > 0);
    assert!(v["uptime"].is_string());

    srv.stop().await;
}

#[tokio::test]
async fn stats_path_follows_config() {
    let cfg = config::load_from_str(
        "version: 1\nserver:\n  listen: \"127.0.0.1:0\"\n  stats_path: \"/debug/stats\"\n",
    )
    .unwrap();
    let srv = spawn_server(cfg).await;
    let client = Client::new();

    let resp = client.get(srv.url("/debug/stats")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    // the default path is no longer mounted and falls through to 404
    let resp = client.get(srv.url("/stats")).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    srv.stop().await;
}
