//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use launcher_api::{AppState, build_app};
use launcher_core::config::AppConfig;

/// Test application context backed by a temporary working directory.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Temporary working directory; removed on drop
    pub dir: TempDir,
}

impl TestApp {
    /// Create a test application with an empty content directory.
    pub fn new() -> Self {
        Self::build(|dir| {
            fs::create_dir_all(dir.join("content")).expect("Failed to create content dir");
        })
    }

    /// Create a test application, running `prepare` on the working
    /// directory before services are wired.
    pub fn build(prepare: impl FnOnce(&Path)) -> Self {
        Self::build_with(prepare, |_| {})
    }

    /// Like [`build`](Self::build) but also lets the test adjust the config.
    pub fn build_with(prepare: impl FnOnce(&Path), configure: impl FnOnce(&mut AppConfig)) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        prepare(dir.path());

        let mut config = AppConfig::default();
        config.paths.content_dir = path_string(dir.path().join("content"));
        config.paths.config_dir = path_string(dir.path().join("config"));
        config.paths.legacy_settings_file = path_string(dir.path().join("user-settings.json"));
        config.paths.public_dir = path_string(dir.path().join("public"));
        config.remote.request_timeout_seconds = 5;
        configure(&mut config);

        let state = AppState::from_config(config.clone()).expect("Failed to build app state");
        let router = build_app(state);

        Self {
            router,
            config,
            dir,
        }
    }

    /// Absolute path of `rel` inside the working directory.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Writes a file under the working directory, creating parents.
    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, contents).expect("Failed to write file");
    }

    /// Creates a directory under the working directory.
    pub fn mkdir(&self, rel: &str) {
        fs::create_dir_all(self.path(rel)).expect("Failed to create dir");
    }

    /// Reads a file under the working directory.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("Failed to read file")
    }

    /// Make a request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Sends a prepared request.
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
    /// Raw body
    pub text: String,
}

fn path_string(path: PathBuf) -> String {
    path.to_string_lossy().into_owned()
}
