//! Integration tests for the messaging sidebar endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};

// ---------------------------------------------------------------------------
// Test: conversation listing is newest first with a working limit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn messages_come_newest_first() {
    let app = build_test_app().await;
    let response = get(app, "/api/v1/messages").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 3, 2, 1]);
}

#[tokio::test]
async fn limit_caps_the_conversation() {
    let app = build_test_app().await;
    let json = body_json(get(app, "/api/v1/messages?limit=2").await).await;

    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 3]);
}

// ---------------------------------------------------------------------------
// Test: sending attributes to the viewer and leads the conversation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sent_message_leads_the_conversation() {
    let app = build_test_app().await;

    let sent = post_json(
        app.clone(),
        "/api/v1/messages",
        serde_json::json!({ "text": "Reviewing the audit now." }),
    )
    .await;
    assert_eq!(sent.status(), StatusCode::CREATED);

    let sent_json = body_json(sent).await;
    assert_eq!(sent_json["data"]["sender_name"], "You");
    assert_eq!(sent_json["data"]["is_read"], true);

    let listed = body_json(get(app, "/api/v1/messages").await).await;
    assert_eq!(listed["data"][0]["text"], "Reviewing the audit now.");
}

#[tokio::test]
async fn blank_message_is_rejected() {
    let app = build_test_app().await;
    let response = post_json(
        app,
        "/api/v1/messages",
        serde_json::json!({ "text": "   " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: marking read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mark_read_flips_the_flag() {
    let app = build_test_app().await;

    let response = post_json(
        app.clone(),
        "/api/v1/messages/1/read",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["is_read"], true);

    let missing = post_json(app, "/api/v1/messages/99/read", serde_json::json!({})).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: online roster
// ---------------------------------------------------------------------------

#[tokio::test]
async fn online_roster_excludes_away_and_offline() {
    let app = build_test_app().await;
    let json = body_json(get(app, "/api/v1/users/online").await).await;

    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Sarah Chen",
            "Mike Johnson",
            "Emma Davis",
            "Lisa Wang",
            "Rachel Green"
        ]
    );
}

// ---------------------------------------------------------------------------
// Test: sidebar snapshot
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sidebar_snapshot_counts_unread_from_others() {
    let app = build_test_app().await;
    let json = body_json(get(app, "/api/v1/messages/sidebar").await).await;

    let data = &json["data"];
    assert_eq!(data["messages"].as_array().unwrap().len(), 4);
    assert_eq!(data["online_users"].as_array().unwrap().len(), 5);
    // Three seeded messages are unread; the viewer's own reply is not.
    assert_eq!(data["unread_count"], 3);
    assert!(data["refreshed_at"].is_string());
}
