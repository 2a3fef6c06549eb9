use axum::routing::get;
use axum::Router;

use crate::handlers::requests;
use crate::state::AppState;

/// Request ledger routes mounted at `/requests`.
///
/// ```text
/// GET    /requests        -> list_requests (filter + sort engine)
/// POST   /requests        -> create_request (validated submission)
/// GET    /requests/{id}   -> get_request
/// PATCH  /requests/{id}   -> update_request
/// DELETE /requests/{id}   -> delete_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/requests",
            get(requests::list_requests).post(requests::create_request),
        )
        .route(
            "/requests/{id}",
            get(requests::get_request)
                .patch(requests::update_request)
                .delete(requests::delete_request),
        )
}
