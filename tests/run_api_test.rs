//! Run API Integration Tests
//!
//! Drives the full router against real engine scripts written to a
//! temporary directory.
#![cfg(unix)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use engine_gateway::application::GatewayService;
use engine_gateway::infrastructure::process::ProcessEngineRunner;
use engine_gateway::interface::api::{build_router, AppState};
use futures::future::join_all;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt; // For `oneshot`

const VALIDATION_MESSAGE: &str = "Please provide both arg1 and arg2 in the query string.";

#[tokio::test]
async fn test_api_run_echoes_engine_stdout() {
    let dir = TempDir::new().unwrap();
    let engine = write_engine(&dir, r#"printf '%s %s' "$1" "$2""#);

    let (status, body) = get(app(&engine, None), "/run?arg1=hello&arg2=world").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "hello world");
}

#[tokio::test]
async fn test_api_run_keeps_trailing_output() {
    let dir = TempDir::new().unwrap();
    let engine = write_engine(&dir, r#"printf '  %s\n\n' "$1""#);

    let (status, body) = get(app(&engine, None), "/run?arg1=x&arg2=y").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "  x\n\n");
}

#[tokio::test]
async fn test_api_run_passes_exactly_two_arguments() {
    let dir = TempDir::new().unwrap();
    let engine = write_engine(&dir, r#"printf '%s:%s:%s' "$#" "$1" "$2""#);

    let (status, body) = get(
        app(&engine, None),
        "/run?arg1=%24(id)%3B%20ls&arg2=%60whoami%60%20%7C%20cat",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "2:$(id); ls:`whoami` | cat");
}

#[tokio::test]
async fn test_api_run_missing_arg2() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("spawned");
    let engine = write_engine(&dir, &format!("touch {}", marker.display()));

    let (status, body) = get(app(&engine, None), "/run?arg1=hello").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, VALIDATION_MESSAGE);
    assert!(!marker.exists(), "engine must not be spawned");
}

#[tokio::test]
async fn test_api_run_missing_engine() {
    let dir = TempDir::new().unwrap();
    let engine = dir.path().join("engine");

    let (status, body) = get(app(&engine, None), "/run?arg1=a&arg2=b").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Error: "), "body: {}", body);
}

#[tokio::test]
async fn test_api_run_nonzero_exit() {
    let dir = TempDir::new().unwrap();
    let engine = write_engine(&dir, "echo 'bad move' >&2\nexit 1");

    let (status, body) = get(app(&engine, None), "/run?arg1=a&arg2=b").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Error: Command failed: "), "body: {}", body);
    assert!(body.contains("bad move"));
}

#[tokio::test]
async fn test_api_run_stderr_does_not_change_response() {
    let dir = TempDir::new().unwrap();
    let engine = write_engine(&dir, "echo 'deprecated flag' >&2\nprintf result");

    let (status, body) = get(app(&engine, None), "/run?arg1=a&arg2=b").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "result");
}

#[tokio::test]
async fn test_api_run_times_out() {
    let dir = TempDir::new().unwrap();
    let engine = write_engine(&dir, "sleep 10");

    let (status, body) = get(
        app(&engine, Some(Duration::from_millis(300))),
        "/run?arg1=a&arg2=b",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Error: Command timed out"), "body: {}", body);
}

#[tokio::test]
async fn test_api_concurrent_requests_are_independent() {
    let dir = TempDir::new().unwrap();
    let engine = write_engine(&dir, r#"printf '%s' "$1""#);
    let app = app(&engine, None);

    let requests = (0..8).map(|i| {
        let app = app.clone();
        async move { get(app, &format!("/run?arg1=req{}&arg2=x", i)).await }
    });
    let responses = join_all(requests).await;

    for (i, (status, body)) in responses.into_iter().enumerate() {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, format!("req{}", i));
    }
}

fn app(engine: &Path, timeout: Option<Duration>) -> Router {
    let runner = ProcessEngineRunner::new(engine).with_timeout(timeout);
    let gateway = GatewayService::new(Arc::new(runner));
    let handle = PrometheusBuilder::new().build_recorder().handle();
    build_router(AppState::new(Arc::new(gateway)), handle)
}

fn write_engine(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("engine");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}
