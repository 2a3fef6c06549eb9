//! Handlers for the verification service catalog.
//!
//! The list endpoint accepts the full dashboard query state and runs the
//! filter engine server-side, so every list it returns is a stable-order
//! subset of the catalog.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use compliancehub_core::query::{
    filter_services, DateRange, ServiceQuery, ServiceStatusFilter, CATEGORY_ALL,
};
use compliancehub_core::service::{NewService, ServicePatch};
use compliancehub_core::types::{DbId, Timestamp};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query params for `GET /services`.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceListParams {
    /// Case-insensitive substring over name, description, category.
    pub search: Option<String>,
    /// Exact category; omit or pass `All` for every category.
    pub category: Option<String>,
    /// Derived status bucket; omit for every service.
    pub status: Option<ServiceStatusFilter>,
    /// Accepted for forward compatibility; not applied by any predicate.
    pub date_from: Option<Timestamp>,
    pub date_to: Option<Timestamp>,
}

impl ServiceListParams {
    fn into_query(self) -> ServiceQuery {
        let date_range = match (self.date_from, self.date_to) {
            (None, None) => None,
            (start, end) => Some(DateRange { start, end }),
        };

        ServiceQuery {
            search_term: self.search.unwrap_or_default(),
            category: self.category.unwrap_or_else(|| CATEGORY_ALL.to_string()),
            status: self.status.unwrap_or_default(),
            date_range,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/services
///
/// Returns the catalog filtered by the dashboard query state.
pub async fn list_services(
    State(state): State<AppState>,
    Query(params): Query<ServiceListParams>,
) -> AppResult<impl IntoResponse> {
    let services = state.services.list().await?;
    let items = filter_services(&services, &params.into_query());

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/services/{id}
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let service = state
        .services
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("service", id))?;

    Ok(Json(DataResponse { data: service }))
}

/// POST /api/v1/services
pub async fn create_service(
    State(state): State<AppState>,
    Json(input): Json<NewService>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }

    let service = state.services.create(input).await?;
    tracing::info!(id = service.id, name = %service.name, "Service created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: service })))
}

/// PATCH /api/v1/services/{id}
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<ServicePatch>,
) -> AppResult<impl IntoResponse> {
    let service = state
        .services
        .update(id, &patch)
        .await?
        .ok_or_else(|| AppError::not_found("service", id))?;

    Ok(Json(DataResponse { data: service }))
}

/// DELETE /api/v1/services/{id}
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.services.delete(id).await? {
        return Err(AppError::not_found("service", id));
    }

    tracing::info!(id, "Service deleted");
    Ok(StatusCode::NO_CONTENT)
}
