//! Integration tests for the HTTP server, liveness endpoint, and graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use envboard::config::Settings;
use envboard::env::MapEnv;
use envboard::server::{self, AppState};

async fn start_test_server(
    env: MapEnv,
    settings: Settings,
) -> (SocketAddr, tokio::sync::oneshot::Sender<()>) {
    let state = Arc::new(AppState::new(settings, Arc::new(env)));
    let router = server::build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    (addr, shutdown_tx)
}

#[tokio::test]
async fn healthz_returns_ok_with_empty_environment() {
    let (addr, shutdown) = start_test_server(MapEnv::new(), Settings::default()).await;

    let resp = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");

    let _ = shutdown.send(());
}

#[tokio::test]
async fn index_serves_html() {
    let env: MapEnv = [("APP_NAME", "demo-app")].into_iter().collect();
    let (addr, shutdown) = start_test_server(env, Settings::default()).await;

    let resp = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"), "{content_type}");

    let body = resp.text().await.unwrap();
    assert!(body.contains("demo-app"));
    assert!(body.contains("APP_JWT_SECRET"));

    let _ = shutdown.send(());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (addr, shutdown) = start_test_server(MapEnv::new(), Settings::default()).await;

    let resp = reqwest::get(format!("http://{addr}/nonexistent")).await.unwrap();
    assert_eq!(resp.status(), 404);

    let _ = shutdown.send(());
}

#[tokio::test]
async fn graceful_shutdown_works() {
    let (addr, shutdown) = start_test_server(MapEnv::new(), Settings::default()).await;

    // Verify server is running
    let url = format!("http://{addr}/healthz");
    assert!(reqwest::get(&url).await.is_ok());

    // Send shutdown
    let _ = shutdown.send(());

    // Give it a moment to shut down
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    // Server should no longer accept connections
    let result = reqwest::get(&url).await;
    assert!(result.is_err());
}
