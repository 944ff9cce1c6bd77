//! `HttpLoader` against a local axum server.

#![cfg(all(feature = "remote-source", feature = "http-server"))]

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use draft_review::error::ReviewError;
use draft_review::io::{DocumentLoader, HttpLoader};

async fn serve() -> String {
    let app = Router::new()
        .route(
            "/data/events_delta.json",
            get(|| async { axum::Json(json!({"summary": {"run_at": "remote"}})) }),
        )
        .route(
            "/out/drafts.json",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/out/broken.json", get(|| async { "{ not json" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_http_loader_success() {
    let loader = HttpLoader::new(serve().await).unwrap();
    let value = loader.load("data/events_delta.json").await.unwrap();
    assert_eq!(value["summary"]["run_at"], "remote");
}

#[tokio::test]
async fn test_http_loader_non_success_status() {
    let loader = HttpLoader::new(serve().await).unwrap();
    let err = loader.load("out/drafts.json").await.unwrap_err();
    assert_eq!(err, ReviewError::fetch("out/drafts.json", 500));
    assert_eq!(err.to_string(), "Failed to load out/drafts.json: 500");
}

#[tokio::test]
async fn test_http_loader_missing_route_is_404() {
    let loader = HttpLoader::new(serve().await).unwrap();
    let err = loader.load("out/nothing.json").await.unwrap_err();
    assert_eq!(err, ReviewError::fetch("out/nothing.json", 404));
}

#[tokio::test]
async fn test_http_loader_invalid_body() {
    let loader = HttpLoader::new(serve().await).unwrap();
    let err = loader.load("/out/broken.json").await.unwrap_err();
    assert!(matches!(err, ReviewError::Parse { .. }));
}

/// Answers one request with a 200 whose body is cut short of its length.
async fn serve_truncated() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n{\"items\"")
            .await
            .unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_http_loader_truncated_body_is_parse_error() {
    let loader = HttpLoader::new(serve_truncated().await).unwrap();
    let err = loader.load("out/drafts.json").await.unwrap_err();
    match err {
        ReviewError::Parse { path, .. } => assert_eq!(path, "out/drafts.json"),
        other => panic!("expected a parse error, got {:?}", other),
    }
}
