use axum::routing::get;
use axum::Router;

use crate::handlers::services;
use crate::state::AppState;

/// Service catalog routes mounted at `/services`.
///
/// ```text
/// GET    /services        -> list_services (filter engine)
/// POST   /services        -> create_service
/// GET    /services/{id}   -> get_service
/// PATCH  /services/{id}   -> update_service
/// DELETE /services/{id}   -> delete_service
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/services",
            get(services::list_services).post(services::create_service),
        )
        .route(
            "/services/{id}",
            get(services::get_service)
                .patch(services::update_service)
                .delete(services::delete_service),
        )
}
