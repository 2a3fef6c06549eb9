//! Handlers for the favorite services set.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use compliancehub_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `POST /favorites/toggle`.
#[derive(Debug, Deserialize)]
pub struct ToggleFavorite {
    pub service_id: DbId,
}

/// Result of a toggle, including whether the set reached disk.
#[derive(Debug, Serialize)]
pub struct ToggleResult {
    pub service_id: DbId,
    pub favorite: bool,
    /// `false` when the write failed; the in-memory set still holds.
    pub persisted: bool,
}

/// GET /api/v1/favorites
pub async fn list_favorites(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let ids = state.favorites.list().await;
    Ok(Json(DataResponse { data: ids }))
}

/// POST /api/v1/favorites/toggle
///
/// Flips the favorite flag for an existing service.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Json(input): Json<ToggleFavorite>,
) -> AppResult<impl IntoResponse> {
    state
        .services
        .get(input.service_id)
        .await?
        .ok_or_else(|| AppError::not_found("service", input.service_id))?;

    let outcome = state.favorites.toggle(input.service_id).await;

    Ok(Json(DataResponse {
        data: ToggleResult {
            service_id: outcome.service_id,
            favorite: outcome.favorite,
            persisted: outcome.persisted,
        },
    }))
}
