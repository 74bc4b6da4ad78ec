//! Integration tests for the content tree endpoint.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_tree_lists_folders_first_and_hides_dotfiles() {
    let app = helpers::TestApp::new();
    app.write("content/A/a.txt", "x");
    app.mkdir("content/B");
    app.write("content/z.txt", "x");
    app.write("content/.hidden", "x");
    app.write("content/A/.DS_Store", "x");

    let response = app.request("GET", "/api/tree", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["exists"], true);
    assert!(response.body.get("message").is_none());
    assert_eq!(
        response.body["tree"],
        json!({
            "name": "content",
            "path": "",
            "type": "folder",
            "children": [
                {
                    "name": "A",
                    "path": "A",
                    "type": "folder",
                    "children": [
                        { "name": "a.txt", "path": "A/a.txt", "type": "file", "children": [] }
                    ]
                },
                { "name": "B", "path": "B", "type": "folder", "children": [] },
                { "name": "z.txt", "path": "z.txt", "type": "file", "children": [] }
            ]
        })
    );
}

#[tokio::test]
async fn test_tree_on_missing_content_root() {
    let app = helpers::TestApp::build(|_| {});

    let response = app.request("GET", "/api/tree", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "exists": false,
            "message": "content directory not found",
            "tree": null
        })
    );
}

#[tokio::test]
async fn test_tree_reflects_filesystem_changes() {
    let app = helpers::TestApp::new();

    let before = app.request("GET", "/api/tree", None).await;
    assert_eq!(before.body["tree"]["children"], json!([]));

    app.write("content/Shows/S01/e01.mkv", "x");

    let after = app.request("GET", "/api/tree", None).await;
    assert_eq!(after.body["tree"]["children"][0]["path"], "Shows");
    assert_eq!(
        after.body["tree"]["children"][0]["children"][0]["children"][0]["path"],
        "Shows/S01/e01.mkv"
    );
}

#[tokio::test]
async fn test_tree_respects_configured_depth() {
    let app = helpers::TestApp::build_with(
        |dir| std::fs::create_dir_all(dir.join("content/a/b/c")).unwrap(),
        |config| config.tree.max_depth = Some(2),
    );

    let response = app.request("GET", "/api/tree", None).await;

    let a = &response.body["tree"]["children"][0];
    assert_eq!(a["path"], "a");
    assert_eq!(a["children"][0]["path"], "a/b");
    assert_eq!(a["children"][0]["children"], json!([]));
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_static_fallback_serves_public_dir() {
    let app = helpers::TestApp::new();
    app.write("public/index.html", "<h1>launcher</h1>");

    let index = app.request("GET", "/", None).await;
    assert_eq!(index.status, StatusCode::OK);
    assert!(index.text.contains("launcher"));

    let missing = app.request("GET", "/nope.js", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
