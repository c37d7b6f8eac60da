//! Posting and listing messages

use axum::http::{Method, StatusCode};
use bson::oid::ObjectId;
use serde_json::{json, Value};

use crate::common::{assert_error, TestApp};

async fn send(app: &TestApp, conversation_id: &str, sender: &str, text: &str) -> (StatusCode, Value) {
    app.call(
        Method::POST,
        "/api/messages",
        Some(json!({"conversation_id": conversation_id, "sender": sender, "text": text})),
    )
    .await
}

mod test_send_message {
    use super::*;

    #[tokio::test]
    async fn test_send_returns_id() {
        let app = TestApp::new();
        let conv_id = app.general_conversation_id().await;

        let (status, body) = send(&app, &conv_id, "alice", "hello").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"].as_str().unwrap().len(), 24);
        assert_eq!(app.message_count(), 1);
    }

    #[tokio::test]
    async fn test_unseen_sender_is_registered_once() {
        let app = TestApp::new();
        let conv_id = app.general_conversation_id().await;

        send(&app, &conv_id, "newbie", "first").await;
        assert_eq!(app.user_count(), 1);
        assert_eq!(app.message_count(), 1);

        send(&app, &conv_id, "newbie", "second").await;
        assert_eq!(app.user_count(), 1);
        assert_eq!(app.message_count(), 2);
    }

    #[tokio::test]
    async fn test_known_sender_is_not_duplicated() {
        let app = TestApp::new();
        let conv_id = app.general_conversation_id().await;
        app.call(Method::POST, "/api/users", Some(json!({"username": "alice"})))
            .await;

        let (status, _) = send(&app, &conv_id, "alice", "hi").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(app.user_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_conversation_is_404_and_writes_nothing() {
        let app = TestApp::new();
        let missing = ObjectId::new().to_hex();

        let (status, body) = send(&app, &missing, "ghost", "hello?").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_error(&body, "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Conversation not found");
        assert_eq!(app.message_count(), 0);
        assert_eq!(app.user_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_conversation_id_is_400() {
        let app = TestApp::new();

        let (status, body) = send(&app, "not-an-id", "alice", "hi").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error(&body, "INVALID_IDENTIFIER");
        assert_eq!(body["error"]["message"], "Invalid conversation id");
        assert_eq!(app.user_count(), 0);
    }

    #[tokio::test]
    async fn test_text_length_bounds() {
        let app = TestApp::new();
        let conv_id = app.general_conversation_id().await;

        for (text, expected) in [
            (String::new(), StatusCode::UNPROCESSABLE_ENTITY),
            ("x".to_string(), StatusCode::OK),
            ("x".repeat(4000), StatusCode::OK),
            ("x".repeat(4001), StatusCode::UNPROCESSABLE_ENTITY),
        ] {
            let (status, _) = send(&app, &conv_id, "alice", &text).await;
            assert_eq!(status, expected, "text of {} chars", text.len());
        }

        assert_eq!(app.message_count(), 2);
    }

    #[tokio::test]
    async fn test_schema_checked_before_identifier() {
        let app = TestApp::new();

        let (status, _) = send(&app, "not-an-id", "alice", "").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_short_sender_is_422() {
        let app = TestApp::new();
        let conv_id = app.general_conversation_id().await;

        let (status, body) = send(&app, &conv_id, "a", "hi").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error(&body, "VALIDATION_ERROR");
        assert_eq!(app.message_count(), 0);
    }
}

mod test_list_messages {
    use super::*;

    #[tokio::test]
    async fn test_list_returns_messages_in_order() {
        let app = TestApp::new();
        let conv_id = app.general_conversation_id().await;

        for text in ["one", "two", "three"] {
            send(&app, &conv_id, "alice", text).await;
        }

        let (status, body) = app
            .call(Method::GET, &format!("/api/messages/{}", conv_id), None)
            .await;
        assert_eq!(status, StatusCode::OK);

        let messages = body.as_array().unwrap();
        let texts: Vec<&str> = messages.iter().map(|m| m["text"].as_str().unwrap()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);

        let first = &messages[0];
        assert_eq!(first["conversation_id"], conv_id.as_str());
        assert_eq!(first["sender"], "alice");
        assert_eq!(first["id"].as_str().unwrap().len(), 24);
        assert!(first["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_limit_returns_earliest() {
        let app = TestApp::new();
        let conv_id = app.general_conversation_id().await;

        for text in ["m1", "m2", "m3", "m4", "m5"] {
            send(&app, &conv_id, "alice", text).await;
        }

        let (status, body) = app
            .call(
                Method::GET,
                &format!("/api/messages/{}?limit=2", conv_id),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        let texts: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn test_list_only_includes_requested_conversation() {
        let app = TestApp::new();
        let general = app.general_conversation_id().await;
        send(&app, &general, "alice", "in general").await;

        let unrelated = ObjectId::new().to_hex();
        let (status, body) = app
            .call(Method::GET, &format!("/api/messages/{}", unrelated), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_id_is_400() {
        let app = TestApp::new();
        let (status, body) = app
            .call(Method::GET, "/api/messages/not-an-id", None)
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error(&body, "INVALID_IDENTIFIER");
    }

    #[tokio::test]
    async fn test_zero_limit_is_422() {
        let app = TestApp::new();
        let conv_id = app.general_conversation_id().await;

        for limit in ["0", "-1", "abc"] {
            let (status, body) = app
                .call(
                    Method::GET,
                    &format!("/api/messages/{}?limit={}", conv_id, limit),
                    None,
                )
                .await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "limit={}", limit);
            assert_error(&body, "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_large_limit_accepted() {
        let app = TestApp::new();
        let conv_id = app.general_conversation_id().await;
        send(&app, &conv_id, "alice", "only").await;

        let (status, body) = app
            .call(
                Method::GET,
                &format!("/api/messages/{}?limit=100000", conv_id),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }
}
