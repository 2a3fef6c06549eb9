//! HTTP-level integration tests for the `/services` API endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router.
//! The seeded catalog backs every test; filtering behaviour is checked
//! end-to-end through the query string.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, patch_json, post_json};

fn ids(json: &serde_json::Value) -> Vec<i64> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/services returns the full seeded catalog in order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_without_filters_returns_full_catalog() {
    let app = build_test_app().await;
    let response = get(app, "/api/v1/services").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(ids(&json), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

// ---------------------------------------------------------------------------
// Test: search narrows to matching services only
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_is_case_insensitive_and_subset() {
    let app = build_test_app().await;
    let response = get(app.clone(), "/api/v1/services?search=AUDIT").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let matched = ids(&json);
    assert!(!matched.is_empty());

    // Every hit contains the term in name, description, or category.
    for service in json["data"].as_array().unwrap() {
        let haystack = format!(
            "{} {} {}",
            service["name"].as_str().unwrap(),
            service["description"].as_str().unwrap(),
            service["category"].as_str().unwrap()
        )
        .to_lowercase();
        assert!(haystack.contains("audit"));
    }

    // And the result is a subset of the catalog.
    let all = body_json(get(app, "/api/v1/services").await).await;
    let all_ids = ids(&all);
    assert!(matched.iter().all(|id| all_ids.contains(id)));
}

// ---------------------------------------------------------------------------
// Test: category and status filters compose
// ---------------------------------------------------------------------------

#[tokio::test]
async fn category_filter_is_exact() {
    let app = build_test_app().await;
    let response = get(app, "/api/v1/services?category=Regulatory%20Checks").await;

    let json = body_json(response).await;
    assert_eq!(ids(&json), vec![6, 7]);
}

#[tokio::test]
async fn status_completed_means_zero_tally() {
    let app = build_test_app().await;
    let response = get(app, "/api/v1/services?status=completed").await;

    let json = body_json(response).await;
    assert_eq!(ids(&json), vec![5, 7]);
}

#[tokio::test]
async fn pending_and_active_return_the_same_bucket() {
    let app = build_test_app().await;

    let pending = body_json(get(app.clone(), "/api/v1/services?status=pending").await).await;
    let active = body_json(get(app, "/api/v1/services?status=active").await).await;

    assert_eq!(ids(&pending), ids(&active));
    assert_eq!(ids(&pending), vec![1, 2, 3, 4, 6]);
}

#[tokio::test]
async fn negative_tally_surfaces_only_unfiltered() {
    let app = build_test_app().await;

    for status in ["pending", "active", "completed"] {
        let json = body_json(
            get(app.clone(), &format!("/api/v1/services?status={status}")).await,
        )
        .await;
        assert!(!ids(&json).contains(&8), "status={status} leaked id 8");
    }

    let all = body_json(get(app, "/api/v1/services").await).await;
    assert!(ids(&all).contains(&8));
}

// ---------------------------------------------------------------------------
// Test: CRUD round trip and error mapping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_get_patch_delete_round_trip() {
    let app = build_test_app().await;

    let created = post_json(
        app.clone(),
        "/api/v1/services",
        serde_json::json!({
            "name": "Reference Check",
            "description": "Professional reference interviews",
            "category": "Background Checks",
            "icon": "Phone",
            "processing_time": "2-3 business days",
            "cost": 39.0,
        }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let created_json = body_json(created).await;
    // Ids continue one past the seeded maximum.
    assert_eq!(created_json["data"]["id"], 9);
    assert_eq!(created_json["data"]["request_count"], 0);

    let fetched = body_json(get(app.clone(), "/api/v1/services/9").await).await;
    assert_eq!(fetched["data"]["name"], "Reference Check");

    let patched = patch_json(
        app.clone(),
        "/api/v1/services/9",
        serde_json::json!({ "cost": 45.0 }),
    )
    .await;
    assert_eq!(patched.status(), StatusCode::OK);
    let patched_json = body_json(patched).await;
    assert_eq!(patched_json["data"]["cost"], 45.0);
    assert_eq!(patched_json["data"]["name"], "Reference Check");

    let deleted = delete(app.clone(), "/api/v1/services/9").await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = get(app, "/api/v1/services/9").await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_service_maps_to_not_found() {
    let app = build_test_app().await;
    let response = get(app, "/api/v1/services/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn create_without_a_name_is_rejected() {
    let app = build_test_app().await;
    let response = post_json(
        app,
        "/api/v1/services",
        serde_json::json!({
            "name": "   ",
            "category": "Document Services",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
