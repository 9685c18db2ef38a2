use super::*;
use crate::downloader::test_helpers::{ScriptedTool, create_test_downloader};
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use std::time::Duration;
use tower::ServiceExt;


/// Router and downloader wired to the given scripted tool
fn create_test_app(tool: Arc<ScriptedTool>) -> (Router, Arc<MediaDownloader>) {
    let downloader = Arc::new(create_test_downloader(tool));
    let config = downloader.config.clone();
    (create_router(downloader.clone(), config), downloader)
}

/// Issue a GET through the router and collect status, headers and body
async fn send_get(app: Router, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body.to_vec())
}

fn idle_tool() -> Arc<ScriptedTool> {
    ScriptedTool::repeating(crate::downloader::test_helpers::ok_height(1080))
}

#[tokio::test]
async fn test_api_server_spawns() {
    let (_, downloader) = create_test_app(idle_tool());

    let mut config = (*downloader.config).clone();
    config.server.api.bind_address = "127.0.0.1:0".parse().unwrap(); // Port 0 = OS assigns a free port
    let config = Arc::new(config);

    let api_handle = tokio::spawn({
        let downloader = downloader.clone();
        let config = config.clone();
        async move { start_api_server(downloader, config).await }
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!api_handle.is_finished(), "server should still be running");

    api_handle.abort();
}

#[tokio::test]
async fn test_serve_on_bound_listener() {
    let (_, downloader) = create_test_app(idle_tool());
    let config = downloader.config.clone();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server_handle = tokio::spawn(serve(listener, downloader, config));

    let response = reqwest::get(format!("http://{addr}/api/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    server_handle.abort();
}

#[tokio::test]
async fn test_cors_enabled() {
    let (_, downloader) = create_test_app(idle_tool());

    let mut config = (*downloader.config).clone();
    config.server.api.cors_enabled = true;
    config.server.api.cors_origins = vec!["*".to_string()];
    let app = create_router(downloader, Arc::new(config));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("Origin", "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_cors_specific_origin() {
    let (_, downloader) = create_test_app(idle_tool());

    let mut config = (*downloader.config).clone();
    config.server.api.cors_origins = vec!["http://localhost:3000".to_string()];
    let app = create_router(downloader, Arc::new(config));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("Origin", "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("Origin", "http://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(!response.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_cors_disabled() {
    let (_, downloader) = create_test_app(idle_tool());

    let mut config = (*downloader.config).clone();
    config.server.api.cors_enabled = false;
    let app = create_router(downloader, Arc::new(config));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("Origin", "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!response.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_spawn_api_server_method() {
    let tool = idle_tool();
    let mut config = crate::downloader::test_helpers::test_config();
    config.server.api.bind_address = "127.0.0.1:0".parse().unwrap();
    let downloader = Arc::new(MediaDownloader::with_tool(config, tool).unwrap());

    let api_handle = downloader.spawn_api_server();

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!api_handle.is_finished());

    api_handle.abort();
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (app, _) = create_test_app(idle_tool());

    let (status, _, _) = send_get(app, "/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
