//! Handler for the dashboard KPI overview.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use compliancehub_core::stats::{average_processing_days, DerivedStats};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload for the overview cards.
#[derive(Debug, Serialize)]
pub struct OverviewData {
    pub total_requests: i64,
    pub pending_requests: i64,
    pub active_services: i64,
    pub completed_requests: i64,
    /// Mean turnaround of completed requests, whole days.
    pub average_processing_days: i64,
}

/// GET /api/v1/stats/overview
///
/// The count KPIs derive from the service catalog alone; the request
/// ledger contributes only the processing-time average.
pub async fn overview(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let (services, requests) = tokio::join!(state.services.list(), state.requests.list());
    let services = services?;
    let requests = requests?;

    let derived = DerivedStats::from_services(&services);

    Ok(Json(DataResponse {
        data: OverviewData {
            total_requests: derived.total_requests,
            pending_requests: derived.pending_requests,
            active_services: derived.active_services,
            completed_requests: derived.completed_requests,
            average_processing_days: average_processing_days(&requests),
        },
    }))
}
