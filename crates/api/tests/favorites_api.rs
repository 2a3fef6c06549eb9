//! Integration tests for the favorites endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};

// ---------------------------------------------------------------------------
// Test: toggle adds, toggle again removes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn toggle_round_trip() {
    let app = build_test_app().await;

    let empty = body_json(get(app.clone(), "/api/v1/favorites").await).await;
    assert_eq!(empty["data"].as_array().unwrap().len(), 0);

    let added = post_json(
        app.clone(),
        "/api/v1/favorites/toggle",
        serde_json::json!({ "service_id": 3 }),
    )
    .await;
    assert_eq!(added.status(), StatusCode::OK);
    let added_json = body_json(added).await;
    assert_eq!(added_json["data"]["favorite"], true);
    assert_eq!(added_json["data"]["persisted"], true);

    let listed = body_json(get(app.clone(), "/api/v1/favorites").await).await;
    assert_eq!(listed["data"], serde_json::json!([3]));

    let removed = post_json(
        app.clone(),
        "/api/v1/favorites/toggle",
        serde_json::json!({ "service_id": 3 }),
    )
    .await;
    let removed_json = body_json(removed).await;
    assert_eq!(removed_json["data"]["favorite"], false);

    let empty_again = body_json(get(app, "/api/v1/favorites").await).await;
    assert_eq!(empty_again["data"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Test: unknown services cannot be favorited
// ---------------------------------------------------------------------------

#[tokio::test]
async fn toggling_an_unknown_service_is_a_404() {
    let app = build_test_app().await;
    let response = post_json(
        app,
        "/api/v1/favorites/toggle",
        serde_json::json!({ "service_id": 999 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
