//! End-to-end tests for the alert review workflow.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use helpers::TestApp;

#[tokio::test]
async fn test_create_alert_starts_pending() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/alerts",
            json!({
                "title": "Fire",
                "message": "Kitchen fire reported",
                "level": "fire",
                "location": "Block C"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let alert = &body["data"];
    assert_eq!(alert["status"], "pending");
    assert_eq!(alert["level"], "fire");
    assert_eq!(alert["version"], 1);
    assert!(alert["reject_reason"].is_null());

    // Visible both unfiltered and under the pending filter.
    let id = alert["id"].as_str().unwrap().to_string();
    for path in ["/api/alerts", "/api/alerts?status=pending"] {
        let (status, body) = app.get(path).await;
        assert_eq!(status, StatusCode::OK);
        let listed = body["data"].as_array().unwrap();
        assert!(listed.iter().any(|a| a["id"] == id.as_str()));
    }
}

#[tokio::test]
async fn test_create_alert_without_message_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post("/api/alerts", json!({"title": "Fire", "message": ""}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/api/alerts").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_alert_with_unknown_field_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post(
            "/api/alerts",
            json!({"title": "Fire", "message": "Kitchen", "severity": "high"}),
        )
        .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_reject_persists_reason() {
    let app = TestApp::new().await;

    let (_, body) = app
        .post(
            "/api/alerts",
            json!({"title": "Fire", "message": "Kitchen fire reported"}),
        )
        .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .patch(
            &format!("/api/alerts/{id}"),
            json!({"status": "rejected", "reject_reason": "False alarm confirmed"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "rejected");
    assert_eq!(body["data"]["reject_reason"], "False alarm confirmed");
    assert_eq!(body["data"]["version"], 2);

    // The same values come back on a fresh read.
    let (status, body) = app.get(&format!("/api/alerts/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "rejected");
    assert_eq!(body["data"]["reject_reason"], "False alarm confirmed");
}

#[tokio::test]
async fn test_reject_without_reason_is_rejected() {
    let app = TestApp::new().await;

    let (_, body) = app
        .post("/api/alerts", json!({"title": "Leak", "message": "Pipe burst"}))
        .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .patch(&format!("/api/alerts/{id}"), json!({"status": "rejected"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Still pending, reason untouched.
    let (_, body) = app.get(&format!("/api/alerts/{id}")).await;
    assert_eq!(body["data"]["status"], "pending");
    assert!(body["data"]["reject_reason"].is_null());
}

#[tokio::test]
async fn test_approve_discards_supplied_reason() {
    let app = TestApp::new().await;

    let (_, body) = app
        .post("/api/alerts", json!({"title": "Noise", "message": "Loud party"}))
        .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .patch(
            &format!("/api/alerts/{id}"),
            json!({"status": "approved", "reject_reason": "should be ignored"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "approved");
    assert!(body["data"]["reject_reason"].is_null());
}

#[tokio::test]
async fn test_transition_unknown_alert_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app
        .patch(
            &format!("/api/alerts/{}", Uuid::new_v4()),
            json!({"status": "approved"}),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    let (_, body) = app.get("/api/alerts").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_terminal_alert_admits_no_transition() {
    let app = TestApp::new().await;

    let (_, body) = app
        .post("/api/alerts", json!({"title": "Lift", "message": "Lift stuck"}))
        .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .patch(&format!("/api/alerts/{id}"), json!({"status": "approved"}))
        .await;
    assert_eq!(status, StatusCode::OK);

    for target in ["pending", "approved", "rejected"] {
        let (status, body) = app
            .patch(
                &format!("/api/alerts/{id}"),
                json!({"status": target, "reject_reason": "late change of heart"}),
            )
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "INVALID_TRANSITION");
    }
}

#[tokio::test]
async fn test_stale_version_is_a_conflict() {
    let app = TestApp::new().await;

    let (_, body) = app
        .post("/api/alerts", json!({"title": "Gate", "message": "Gate jammed"}))
        .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .patch(
            &format!("/api/alerts/{id}"),
            json!({"status": "approved", "expected_version": 99}),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");

    // The losing reviewer changed nothing.
    let (_, body) = app.get(&format!("/api/alerts/{id}")).await;
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["version"], 1);
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let app = TestApp::new().await;

    for title in ["first", "second", "third"] {
        app.post("/api/alerts", json!({"title": title, "message": "m"}))
            .await;
    }

    let (_, body) = app.get("/api/alerts").await;
    let alerts = body["data"].as_array().unwrap();
    assert_eq!(alerts.len(), 3);

    let timestamps: Vec<&str> = alerts
        .iter()
        .map(|a| a["created_at"].as_str().unwrap())
        .collect();
    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted, "created_at must be non-increasing");
}
