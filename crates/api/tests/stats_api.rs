//! Integration tests for the dashboard KPI overview endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json};

// ---------------------------------------------------------------------------
// Test: overview derives from the seeded catalog and ledger
// ---------------------------------------------------------------------------

#[tokio::test]
async fn overview_matches_seeded_data() {
    let app = build_test_app().await;
    let response = get(app, "/api/v1/stats/overview").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];

    // Tallies: 12 + 8 + 15 + 6 + 0 + 9 + 0, with the -1 clamped to zero.
    assert_eq!(data["total_requests"], 50);
    // Five services carry open requests; two sit at zero.
    assert_eq!(data["pending_requests"], 5);
    assert_eq!(data["active_services"], 5);
    assert_eq!(data["completed_requests"], 2);
    // Two completed requests, ~4.6 days mean turnaround, rounded.
    assert_eq!(data["average_processing_days"], 5);
}

// ---------------------------------------------------------------------------
// Test: stats track catalog changes (derived, never cached)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn overview_recomputes_after_catalog_changes() {
    let app = build_test_app().await;

    // Remove a zero-tally service; the completed bucket shrinks with it.
    let deleted = delete(app.clone(), "/api/v1/services/5").await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(app.clone(), "/api/v1/stats/overview").await).await;
    assert_eq!(json["data"]["completed_requests"], 1);

    // A new submission bumps a service tally, which raises the total.
    let created = post_json(
        app.clone(),
        "/api/v1/requests",
        serde_json::json!({
            "service_id": 1,
            "candidate_name": "Nina Alvarez",
            "candidate_email": "nina.alvarez@example.com",
        }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let json = body_json(get(app, "/api/v1/stats/overview").await).await;
    assert_eq!(json["data"]["total_requests"], 51);
}
