use axum::routing::{get, post};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Favorite services routes mounted at `/favorites`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(favorites::list_favorites))
        .route("/favorites/toggle", post(favorites::toggle_favorite))
}
