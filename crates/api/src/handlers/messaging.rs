//! Handlers for the messaging sidebar: conversation, roster, snapshot.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use compliancehub_core::messaging::NewMessage;
use compliancehub_core::types::DbId;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Default number of messages returned by the conversation endpoint.
const DEFAULT_MESSAGE_LIMIT: usize = 10;
/// Upper bound on a caller-supplied limit.
const MAX_MESSAGE_LIMIT: usize = 50;

/// Query params for `GET /messages`.
#[derive(Debug, Default, Deserialize)]
pub struct MessageListParams {
    pub limit: Option<usize>,
}

/// GET /api/v1/messages
///
/// Returns the newest messages first, up to `limit`.
pub async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<MessageListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_MESSAGE_LIMIT)
        .clamp(1, MAX_MESSAGE_LIMIT);

    let messages = state.messages.recent(limit).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// POST /api/v1/messages
///
/// Sends a message as the dashboard viewer.
pub async fn send_message(
    State(state): State<AppState>,
    Json(input): Json<NewMessage>,
) -> AppResult<impl IntoResponse> {
    let text = input.text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::BadRequest("message text is required".to_string()));
    }

    let message = state.messages.send(text).await?;
    tracing::info!(id = message.id, "Message sent");

    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

/// POST /api/v1/messages/{id}/read
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let message = state
        .messages
        .mark_read(id)
        .await?
        .ok_or_else(|| AppError::not_found("message", id))?;

    Ok(Json(DataResponse { data: message }))
}

/// GET /api/v1/users/online
pub async fn online_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = state.users.online().await?;
    Ok(Json(DataResponse { data: users }))
}

/// GET /api/v1/messages/sidebar
///
/// Serves the snapshot maintained by the background refresh task.
pub async fn sidebar(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let snapshot = state.sidebar.read().await.clone();
    Ok(Json(DataResponse { data: snapshot }))
}
