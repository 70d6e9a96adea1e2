//! End-to-end tests for the visitor-notification workflow.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use societyhub_realtime::message::types::OutboundMessage;

use helpers::TestApp;

#[tokio::test]
async fn test_visitor_notification_end_to_end() {
    let app = TestApp::new().await;
    let mut feed = app.hub.subscribe();

    let (status, body) = app
        .post(
            "/api/notifications/visitor",
            json!({
                "building_number": "B-12",
                "visitor_name": "John Doe",
                "visit_time": "5:00 PM"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let notification = &body["data"];
    assert_eq!(notification["kind"], "info");
    assert_eq!(notification["is_read"], false);
    assert_eq!(notification["title"], "Visitor Entry Alert");
    let message = notification["message"].as_str().unwrap();
    for fragment in ["John Doe", "B-12", "5:00 PM"] {
        assert!(message.contains(fragment), "message missing {fragment}");
    }

    // The broadcast carries the same persisted record.
    match feed.try_recv().expect("no broadcast fired") {
        OutboundMessage::NewNotification(pushed) => {
            assert_eq!(pushed.id.to_string(), notification["id"].as_str().unwrap());
            assert_eq!(pushed.visitor_name, "John Doe");
        }
        other => panic!("unexpected feed event: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_visitor_name_persists_and_broadcasts_nothing() {
    let app = TestApp::new().await;
    let mut feed = app.hub.subscribe();

    let (status, _) = app
        .post(
            "/api/notifications/visitor",
            json!({"building_number": "B-12", "visit_time": "5:00 PM"}),
        )
        .await;
    assert!(status.is_client_error());

    let (_, body) = app.get("/api/notifications").await;
    assert!(body["data"].as_array().unwrap().is_empty());
    assert!(feed.try_recv().is_err(), "no broadcast must fire");
}

#[tokio::test]
async fn test_blank_field_is_a_validation_error() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/notifications/visitor",
            json!({"building_number": "", "visitor_name": "John", "visit_time": "5:00 PM"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("building_number")
    );
}

#[tokio::test]
async fn test_mark_read_is_idempotent() {
    let app = TestApp::new().await;

    let (_, body) = app
        .post(
            "/api/notifications/visitor",
            json!({"building_number": "A-1", "visitor_name": "Jane", "visit_time": "noon"}),
        )
        .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    for _ in 0..2 {
        let (status, body) = app.put(&format!("/api/notifications/{id}/read")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["is_read"], true);
    }
}

#[tokio::test]
async fn test_mark_read_unknown_id_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app
        .put(&format!("/api/notifications/{}/read", Uuid::new_v4()))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_mark_all_read_is_idempotent() {
    let app = TestApp::new().await;

    for name in ["Jane", "John", "June"] {
        app.post(
            "/api/notifications/visitor",
            json!({"building_number": "A-1", "visitor_name": name, "visit_time": "noon"}),
        )
        .await;
    }

    let (status, body) = app.put("/api/notifications/read-all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["marked"], 3);

    let (_, body) = app.put("/api/notifications/read-all").await;
    assert_eq!(body["data"]["marked"], 0);

    let (_, body) = app.get("/api/notifications").await;
    assert!(
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|n| n["is_read"] == true)
    );

    let (_, body) = app.get("/api/notifications/unread-count").await;
    assert_eq!(body["data"]["count"], 0);
}

#[tokio::test]
async fn test_history_is_capped() {
    let app = TestApp::new().await;
    let limit = app.config.realtime.notifications.history_limit as usize;

    for i in 0..(limit + 5) {
        app.post(
            "/api/notifications/visitor",
            json!({
                "building_number": "C-3",
                "visitor_name": format!("Visitor {i}"),
                "visit_time": "9:00 AM"
            }),
        )
        .await;
    }

    let (_, body) = app.get("/api/notifications").await;
    assert_eq!(body["data"].as_array().unwrap().len(), limit);
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let app = TestApp::new().await;

    for name in ["first", "second", "third"] {
        app.post(
            "/api/notifications/visitor",
            json!({"building_number": "D-4", "visitor_name": name, "visit_time": "8:00 AM"}),
        )
        .await;
    }

    let (_, body) = app.get("/api/notifications").await;
    let notifications = body["data"].as_array().unwrap();

    let timestamps: Vec<&str> = notifications
        .iter()
        .map(|n| n["created_at"].as_str().unwrap())
        .collect();
    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted, "created_at must be non-increasing");

    // The side log recorded the same arrivals independently.
    let (_, body) = app.get("/api/visitors").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}
