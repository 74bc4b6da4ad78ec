//! Integration tests for subtitle batch dispatch.

mod helpers;

use std::collections::HashMap;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::json;
use tokio::sync::mpsc;

type Received = mpsc::UnboundedSender<HashMap<String, String>>;

/// Starts a stand-in subtitle server on a random port that records every
/// `/batch` query and answers with `status`.
async fn spawn_subgen(status: StatusCode) -> (u16, mpsc::UnboundedReceiver<HashMap<String, String>>) {
    let (tx, rx) = mpsc::unbounded_channel();

    async fn batch(
        State((tx, status)): State<(Received, StatusCode)>,
        Query(query): Query<HashMap<String, String>>,
    ) -> StatusCode {
        let _ = tx.send(query);
        status
    }

    let router = Router::new()
        .route("/batch", post(batch))
        .with_state((tx, status));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (port, rx)
}

fn app_with_library() -> helpers::TestApp {
    let app = helpers::TestApp::new();
    app.write("content/Shows/Season 1/e01.mkv", "x");
    app
}

async fn configure(app: &helpers::TestApp, port: u16, language: &str) {
    let response = app
        .request(
            "POST",
            "/api/settings",
            Some(json!({
                "serverHost": "127.0.0.1",
                "serverPort": port,
                "defaultLanguage": language
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_generate_sends_batch_request() {
    let app = app_with_library();
    let (port, mut received) = spawn_subgen(StatusCode::OK).await;
    configure(&app, port, "japanese").await;

    let response = app
        .request(
            "POST",
            "/api/generate",
            Some(json!({ "path": "Shows/Season 1/", "type": "folder" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ok"], true);
    assert_eq!(response.body["directory"], "/content/Shows/Season 1");
    assert_eq!(response.body["language"], "ja");
    assert_eq!(response.body["remoteStatus"], 200);
    assert_eq!(
        response.body["remoteUrl"],
        format!("http://127.0.0.1:{port}/batch?directory=%2Fcontent%2FShows%2FSeason+1&forceLanguage=ja")
    );
    assert_eq!(response.body["selection"]["type"], "folder");

    let query = received.recv().await.unwrap();
    assert_eq!(query["directory"], "/content/Shows/Season 1");
    assert_eq!(query["forceLanguage"], "ja");
}

#[tokio::test]
async fn test_generate_sends_resolved_directory() {
    let app = app_with_library();
    app.mkdir("content/Movies");
    let (port, mut received) = spawn_subgen(StatusCode::OK).await;
    configure(&app, port, "en").await;

    let dotted = app
        .request(
            "POST",
            "/api/generate",
            Some(json!({ "path": "Movies/../Shows/Season 1" })),
        )
        .await;
    assert_eq!(dotted.status, StatusCode::OK);
    assert_eq!(dotted.body["directory"], "/content/Shows/Season 1");
    assert_eq!(dotted.body["selection"]["relPath"], "Movies/../Shows/Season 1");

    let absolute = app.path("content/Shows/Season 1").display().to_string();
    let response = app
        .request("POST", "/api/generate", Some(json!({ "path": absolute })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["directory"], "/content/Shows/Season 1");

    for _ in 0..2 {
        let query = received.recv().await.unwrap();
        assert_eq!(query["directory"], "/content/Shows/Season 1");
    }
}

#[tokio::test]
async fn test_generate_reports_remote_error_status() {
    let app = app_with_library();
    let (port, _received) = spawn_subgen(StatusCode::SERVICE_UNAVAILABLE).await;
    configure(&app, port, "en").await;

    let response = app
        .request("POST", "/api/generate", Some(json!({ "path": "Shows/Season 1/e01.mkv" })))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["remoteStatus"], 503);
    assert_eq!(response.body["directory"], "/content/Shows/Season 1/e01.mkv");
}

#[tokio::test]
async fn test_generate_requires_server_settings() {
    let app = app_with_library();

    let response = app
        .request("POST", "/api/generate", Some(json!({ "path": "Shows" })))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "Configure server settings first");
    assert_eq!(response.body["code"], "CONFLICT");
}

#[tokio::test]
async fn test_generate_validates_selection_before_dispatch() {
    let app = app_with_library();
    let (port, mut received) = spawn_subgen(StatusCode::OK).await;
    configure(&app, port, "en").await;

    let escaped = app
        .request("POST", "/api/generate", Some(json!({ "path": "../.." })))
        .await;
    assert_eq!(escaped.status, StatusCode::BAD_REQUEST);

    let missing = app
        .request("POST", "/api/generate", Some(json!({ "path": "Movies" })))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    assert!(received.try_recv().is_err());
}

#[tokio::test]
async fn test_generate_reports_unreachable_server() {
    let app = app_with_library();
    // Bind and drop to get a port with nothing listening on it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    configure(&app, port, "en").await;

    let response = app
        .request("POST", "/api/generate", Some(json!({ "path": "Shows" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.body["code"], "EXTERNAL_SERVICE");
}
