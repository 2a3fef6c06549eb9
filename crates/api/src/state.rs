use std::sync::Arc;

use compliancehub_store::repositories::{MessageRepo, RequestRepo, ServiceRepo, UserRepo};
use compliancehub_store::FavoriteStore;
use tokio::sync::RwLock;

use crate::background::messaging_refresh::SidebarSnapshot;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Service catalog repository.
    pub services: Arc<dyn ServiceRepo>,
    /// Verification request repository.
    pub requests: Arc<dyn RequestRepo>,
    /// Sidebar conversation repository.
    pub messages: Arc<dyn MessageRepo>,
    /// Team roster repository.
    pub users: Arc<dyn UserRepo>,
    /// Favorite service ids with file persistence.
    pub favorites: Arc<FavoriteStore>,
    /// Latest sidebar snapshot, maintained by the messaging refresh task.
    pub sidebar: Arc<RwLock<SidebarSnapshot>>,
}
