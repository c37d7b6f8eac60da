//! Behaviour when the document store never connected

use axum::http::{Method, StatusCode};
use bson::oid::ObjectId;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::{assert_error, build_request, parse_body, unavailable_router};

async fn call(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let response = unavailable_router()
        .oneshot(build_request(method, uri, body))
        .await
        .unwrap();
    let status = response.status();
    (status, parse_body(response).await)
}

#[tokio::test]
async fn test_health_and_diagnostics_still_answer() {
    let (status, body) = call(Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Chat backend running");

    let (status, body) = call(Method::GET, "/test", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "❌ Not Available");
}

#[tokio::test]
async fn test_store_backed_endpoints_are_500() {
    let conv_id = ObjectId::new().to_hex();
    let requests = [
        (Method::POST, "/api/bootstrap".to_string(), None),
        (
            Method::POST,
            "/api/users".to_string(),
            Some(json!({"username": "alice"})),
        ),
        (Method::GET, "/api/conversations".to_string(), None),
        (Method::GET, format!("/api/messages/{}", conv_id), None),
        (
            Method::POST,
            "/api/messages".to_string(),
            Some(json!({"conversation_id": conv_id, "sender": "alice", "text": "hi"})),
        ),
    ];

    for (method, uri, body) in requests {
        let (status, body) = call(method, &uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_error(&body, "SERVICE_UNAVAILABLE");
        assert_eq!(body["error"]["message"], "Database not available");
    }
}

#[tokio::test]
async fn test_request_checks_run_before_availability() {
    let (status, _) = call(Method::GET, "/api/messages/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(
        Method::POST,
        "/api/users",
        Some(json!({"username": "a"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
