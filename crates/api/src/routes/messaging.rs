use axum::routing::{get, post};
use axum::Router;

use crate::handlers::messaging;
use crate::state::AppState;

/// Messaging sidebar routes.
///
/// ```text
/// GET  /messages             -> list_messages
/// POST /messages             -> send_message
/// POST /messages/{id}/read   -> mark_message_read
/// GET  /messages/sidebar     -> sidebar snapshot
/// GET  /users/online         -> online_users
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/messages",
            get(messaging::list_messages).post(messaging::send_message),
        )
        .route("/messages/sidebar", get(messaging::sidebar))
        .route("/messages/{id}/read", post(messaging::mark_message_read))
        .route("/users/online", get(messaging::online_users))
}
