//! Route definitions, one module per resource.

pub mod favorites;
pub mod health;
pub mod messaging;
pub mod requests;
pub mod services;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /services                 list (filtered), create
/// /services/{id}            get, patch, delete
///
/// /requests                 list (filtered + sorted), create
/// /requests/{id}            get, patch, delete
///
/// /stats/overview           dashboard KPI overview (GET)
///
/// /messages                 recent conversation (GET), send (POST)
/// /messages/{id}/read       mark read (POST)
/// /messages/sidebar         background-refreshed snapshot (GET)
/// /users/online             online roster (GET)
///
/// /favorites                favorite service ids (GET)
/// /favorites/toggle         flip a favorite (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(services::router())
        .merge(requests::router())
        .merge(stats::router())
        .merge(messaging::router())
        .merge(favorites::router())
}
