//! Bootstrap and conversation listing

use axum::http::{Method, StatusCode};
use bson::doc;
use chatline_store::DocumentStore;
use serde_json::{json, Value};

use crate::common::TestApp;

#[tokio::test]
async fn test_bootstrap_creates_general() {
    let app = TestApp::new();
    let (status, body) = app.call(Method::POST, "/api/bootstrap", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    assert_eq!(app.conversation_count(), 1);
}

#[tokio::test]
async fn test_bootstrap_is_idempotent() {
    let app = TestApp::new();
    for _ in 0..3 {
        let (status, _) = app.call(Method::POST, "/api/bootstrap", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = app.call(Method::GET, "/api/conversations", None).await;
    let general: Vec<&Value> = body
        .as_array()
        .unwrap()
        .iter()
        .filter(|c| c["title"] == "General")
        .collect();
    assert_eq!(general.len(), 1);
    assert_eq!(app.conversation_count(), 1);
}

#[tokio::test]
async fn test_list_conversations_empty() {
    let app = TestApp::new();
    let (status, body) = app.call(Method::GET, "/api/conversations", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_conversations_after_bootstrap() {
    let app = TestApp::new();
    let id = app.general_conversation_id().await;

    let (status, body) = app.call(Method::GET, "/api/conversations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"id": id, "title": "General", "members": null}])
    );
}

#[tokio::test]
async fn test_list_conversations_includes_members() {
    let app = TestApp::new();
    app.store
        .create_document(
            "conversation",
            doc! { "title": "Pair", "members": ["zed", "amy"] },
        )
        .await
        .unwrap();

    let (_, body) = app.call(Method::GET, "/api/conversations", None).await;
    assert_eq!(body[0]["title"], "Pair");
    assert_eq!(body[0]["members"], json!(["zed", "amy"]));
}
