use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// KPI routes mounted at `/stats`.
pub fn router() -> Router<AppState> {
    Router::new().route("/stats/overview", get(stats::overview))
}
