//! Integration tests for settings persistence and legacy migration.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_get_without_settings_returns_defaults() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/settings", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "exists": false,
            "settings": { "serverHost": "", "serverPort": "", "defaultLanguage": "en" }
        })
    );
    assert!(app.path("config").is_dir());
}

#[tokio::test]
async fn test_save_normalizes_and_persists() {
    let app = helpers::TestApp::new();

    let saved = app
        .request(
            "POST",
            "/api/settings",
            Some(json!({
                "serverHost": "  subgen.local ",
                "serverPort": " 9000 ",
                "defaultLanguage": "Spanish",
                "extra": true
            })),
        )
        .await;

    assert_eq!(saved.status, StatusCode::OK);
    assert_eq!(
        saved.body,
        json!({
            "ok": true,
            "settings": { "serverHost": "subgen.local", "serverPort": "9000", "defaultLanguage": "es" }
        })
    );

    let loaded = app.request("GET", "/api/settings", None).await;
    assert_eq!(loaded.body["exists"], true);
    assert_eq!(loaded.body["settings"], saved.body["settings"]);

    assert_eq!(
        app.read("config/user-settings.json"),
        "{\n  \"serverHost\": \"subgen.local\",\n  \"serverPort\": \"9000\",\n  \"defaultLanguage\": \"es\"\n}"
    );
}

#[tokio::test]
async fn test_save_rejects_out_of_range_ports() {
    let app = helpers::TestApp::new();

    for (port, expected) in [
        (json!(70000), ""),
        (json!("0"), ""),
        (json!("abc"), ""),
        (json!(8080), "8080"),
        (json!("65535"), "65535"),
    ] {
        let response = app
            .request(
                "POST",
                "/api/settings",
                Some(json!({ "serverHost": "h", "serverPort": port })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["settings"]["serverPort"], expected, "port {port}");
    }
}

#[tokio::test]
async fn test_save_replaces_previous_values() {
    let app = helpers::TestApp::new();

    app.request(
        "POST",
        "/api/settings",
        Some(json!({ "serverHost": "a", "serverPort": 1, "defaultLanguage": "fr" })),
    )
    .await;
    let response = app
        .request("POST", "/api/settings", Some(json!({ "serverHost": "b" })))
        .await;

    assert_eq!(
        response.body["settings"],
        json!({ "serverHost": "b", "serverPort": "", "defaultLanguage": "en" })
    );
}

#[tokio::test]
async fn test_save_with_empty_body_stores_defaults() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/api/settings", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["settings"]["serverHost"], "");
    assert!(app.path("config/user-settings.json").is_file());
}

#[tokio::test]
async fn test_malformed_json_is_a_client_error() {
    let app = helpers::TestApp::new();

    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/settings")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "VALIDATION");
    assert!(!app.path("config/user-settings.json").exists());
}

#[tokio::test]
async fn test_save_failure_reports_persist_error() {
    let app = helpers::TestApp::new();
    // A regular file where the settings directory should be.
    app.write("config", "not a directory");

    let response = app
        .request("POST", "/api/settings", Some(json!({ "serverHost": "h" })))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        json!({ "error": "Failed to save settings", "code": "PERSIST_FAILED" })
    );
}

#[tokio::test]
async fn test_legacy_file_is_migrated_on_first_read() {
    let app = helpers::TestApp::new();
    app.write(
        "user-settings.json",
        r#"{"serverHost":"h","serverPort":"9000","defaultLanguage":"ENGLISH"}"#,
    );

    let response = app.request("GET", "/api/settings", None).await;

    assert_eq!(
        response.body,
        json!({
            "exists": true,
            "settings": { "serverHost": "h", "serverPort": "9000", "defaultLanguage": "en" }
        })
    );
    assert!(app.path("config/user-settings.json").is_file());
    assert!(app.path("user-settings.json").is_file());
}

#[tokio::test]
async fn test_canonical_file_wins_over_legacy() {
    let app = helpers::TestApp::new();
    app.write(
        "user-settings.json",
        r#"{"serverHost":"legacy","serverPort":"1","defaultLanguage":"de"}"#,
    );
    app.write(
        "config/user-settings.json",
        r#"{"serverHost":"canonical","serverPort":"2","defaultLanguage":"hi"}"#,
    );

    let response = app.request("GET", "/api/settings", None).await;

    assert_eq!(response.body["settings"]["serverHost"], "canonical");
    assert_eq!(response.body["settings"]["defaultLanguage"], "hi");
}

#[tokio::test]
async fn test_corrupt_settings_file_reads_as_absent() {
    let app = helpers::TestApp::new();
    app.write("config/user-settings.json", "{ truncated");

    let response = app.request("GET", "/api/settings", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["exists"], false);
    assert_eq!(response.body["settings"]["defaultLanguage"], "en");
}
