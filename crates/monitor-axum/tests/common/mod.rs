//! Shared helpers for monitor-axum integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use monitor_axum::bootstrap::{AxumContext, ServerConfig, bootstrap};
use monitor_axum::routes::create_router;
use monitor_core::LogRecord;
use tempfile::TempDir;
use tower::ServiceExt;

/// A router over a fresh log file in a temporary directory.
pub struct TestApp {
    pub router: Router,
    pub log_file: PathBuf,
    // Held so the directory outlives the router.
    _dir: TempDir,
}

pub fn test_config(dir: &TempDir) -> ServerConfig {
    let mut config = ServerConfig::with_defaults().with_log_file(dir.path().join("monitor.log"));
    config.host = "127.0.0.1".to_string();
    config.port = 0;
    config
}

pub async fn test_context(config: &ServerConfig) -> AxumContext {
    bootstrap(config).await.expect("bootstrap test context")
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    pub async fn with_config(adjust: impl FnOnce(&mut ServerConfig)) -> Self {
        let dir = TempDir::new().unwrap();
        let mut config = test_config(&dir);
        adjust(&mut config);

        let ctx = test_context(&config).await;
        Self {
            router: create_router(ctx),
            log_file: config.settings.log_file,
            _dir: dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn put_log(&self, id: &str, body: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("PUT")
                .uri(format!("/log/{id}"))
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub fn parse_records(bytes: &[u8]) -> Vec<LogRecord> {
    std::str::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|line| LogRecord::from_line(line).unwrap())
        .collect()
}
