//! Handlers for the verification request ledger.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use compliancehub_core::query::{
    filter_and_sort_requests, RequestStatusFilter, SortDirection, SortField, SortState,
};
use compliancehub_core::request::{CreateRequest, RequestPatch};
use compliancehub_core::service::ServicePatch;
use compliancehub_core::types::DbId;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query params for `GET /requests`.
#[derive(Debug, Default, Deserialize)]
pub struct RequestListParams {
    /// Exact status, or omit for every request.
    pub status: Option<RequestStatusFilter>,
    pub sort_field: Option<SortField>,
    pub sort_direction: Option<SortDirection>,
}

impl RequestListParams {
    /// Resolve the sort state the way the table header does: no field
    /// means the initial newest-first view, an explicit field without a
    /// direction starts ascending.
    fn sort_state(&self) -> SortState {
        match (self.sort_field, self.sort_direction) {
            (None, None) => SortState::default(),
            (field, direction) => SortState {
                field: field.unwrap_or(SortField::CreatedAt),
                direction: direction.unwrap_or(SortDirection::Asc),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/requests
///
/// Returns the ledger filtered by status and sorted by the requested
/// column.
pub async fn list_requests(
    State(state): State<AppState>,
    Query(params): Query<RequestListParams>,
) -> AppResult<impl IntoResponse> {
    let requests = state.requests.list().await?;
    let status = params.status.unwrap_or_default();
    let items = filter_and_sort_requests(&requests, status, &params.sort_state());

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/requests/{id}
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let request = state
        .requests
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("request", id))?;

    Ok(Json(DataResponse { data: request }))
}

/// POST /api/v1/requests
///
/// Records a submission against an existing service and bumps that
/// service's open request tally.
pub async fn create_request(
    State(state): State<AppState>,
    Json(input): Json<CreateRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let service = state
        .services
        .get(input.service_id)
        .await?
        .ok_or_else(|| AppError::not_found("service", input.service_id))?;

    let request = state.requests.create(input).await?;

    // Keep the catalog tally in step with the ledger. The request is
    // already recorded, so a lost race here only skews the tally, never
    // the ledger.
    let bumped = state
        .services
        .update(
            service.id,
            &ServicePatch {
                request_count: Some(service.request_count + 1),
                ..ServicePatch::default()
            },
        )
        .await?;
    if bumped.is_none() {
        tracing::warn!(service_id = service.id, "Service vanished before tally bump");
    }

    tracing::info!(
        id = request.id,
        service_id = request.service_id,
        urgency = request.urgency.as_str(),
        "Verification request submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// PATCH /api/v1/requests/{id}
pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<RequestPatch>,
) -> AppResult<impl IntoResponse> {
    let request = state
        .requests
        .update(id, &patch)
        .await?
        .ok_or_else(|| AppError::not_found("request", id))?;

    Ok(Json(DataResponse { data: request }))
}

/// DELETE /api/v1/requests/{id}
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.requests.delete(id).await? {
        return Err(AppError::not_found("request", id));
    }

    tracing::info!(id, "Request deleted");
    Ok(StatusCode::NO_CONTENT)
}
