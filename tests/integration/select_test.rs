//! Integration tests for selection validation.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

fn app_with_library() -> helpers::TestApp {
    let app = helpers::TestApp::new();
    app.write("content/Movies/Film A/film.mkv", "x");
    app.write("secret.txt", "outside");
    app
}

#[tokio::test]
async fn test_select_folder() {
    let app = app_with_library();

    let response = app
        .request(
            "POST",
            "/api/select",
            Some(json!({ "path": "Movies/Film A", "type": "folder" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ok"], true);
    assert_eq!(response.body["type"], "folder");
    assert_eq!(response.body["relPath"], "Movies/Film A");
    let absolute = response.body["absolutePath"].as_str().unwrap();
    assert!(std::path::Path::new(absolute).ends_with("content/Movies/Film A"));
}

#[tokio::test]
async fn test_select_reports_kind_from_disk() {
    let app = app_with_library();

    let response = app
        .request(
            "POST",
            "/api/select",
            Some(json!({ "path": "Movies/Film A/film.mkv", "type": "folder" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["type"], "file");
}

#[tokio::test]
async fn test_select_without_path_is_the_root() {
    let app = app_with_library();

    let response = app.request("POST", "/api/select", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["type"], "folder");
    assert_eq!(response.body["relPath"], "");
}

#[tokio::test]
async fn test_select_rejects_escapes() {
    let app = app_with_library();

    for path in ["../secret.txt", "../..", "Movies/../../secret.txt", "/etc/passwd"] {
        let response = app
            .request("POST", "/api/select", Some(json!({ "path": path })))
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "path {path}");
        assert_eq!(response.body["error"], "Invalid path");
        assert_eq!(response.body["code"], "INVALID_PATH");
    }
}

#[tokio::test]
async fn test_select_dot_segments_inside_root_are_allowed() {
    let app = app_with_library();

    let response = app
        .request(
            "POST",
            "/api/select",
            Some(json!({ "path": "Movies/../Movies/./Film A" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["relPath"], "Movies/../Movies/./Film A");
}

#[tokio::test]
async fn test_select_missing_path() {
    let app = app_with_library();

    let response = app
        .request("POST", "/api/select", Some(json!({ "path": "Movies/nope.mkv" })))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Not found");
}
