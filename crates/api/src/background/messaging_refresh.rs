//! Periodic refresh of the messaging sidebar snapshot.
//!
//! Rebuilds the sidebar view (recent messages, online roster, unread
//! count) on a fixed interval using `tokio::time::interval`, so the
//! sidebar endpoint serves a ready-made snapshot instead of fanning out
//! on every poll. Runs until its cancellation token fires; shutdown must
//! never leave the timer running.

use std::sync::Arc;
use std::time::Duration;

use compliancehub_core::messaging::{self, Message, User};
use compliancehub_core::types::Timestamp;
use compliancehub_store::repositories::{MessageRepo, UserRepo};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// How many messages the sidebar keeps in view.
pub const SIDEBAR_MESSAGE_LIMIT: usize = 10;

/// Everything the messaging sidebar renders, built in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct SidebarSnapshot {
    pub messages: Vec<Message>,
    pub online_users: Vec<User>,
    pub unread_count: usize,
    /// `None` until the first refresh lands.
    pub refreshed_at: Option<Timestamp>,
}

impl SidebarSnapshot {
    /// Placeholder served until the refresh task has run once.
    pub fn empty() -> Self {
        Self {
            messages: Vec::new(),
            online_users: Vec::new(),
            unread_count: 0,
            refreshed_at: None,
        }
    }
}

/// Run the sidebar refresh loop.
///
/// The first tick fires immediately, so the snapshot is populated as
/// soon as the server is up. Runs until `cancel` is triggered.
pub async fn run(
    messages: Arc<dyn MessageRepo>,
    users: Arc<dyn UserRepo>,
    snapshot: Arc<RwLock<SidebarSnapshot>>,
    refresh_secs: u64,
    cancel: CancellationToken,
) {
    tracing::info!(refresh_secs, "Messaging refresh task started");

    let mut interval = tokio::time::interval(Duration::from_secs(refresh_secs));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Messaging refresh task stopping");
                break;
            }
            _ = interval.tick() => {
                match build_snapshot(messages.as_ref(), users.as_ref()).await {
                    Ok(fresh) => {
                        let unread = fresh.unread_count;
                        *snapshot.write().await = fresh;
                        tracing::debug!(unread, "Sidebar snapshot refreshed");
                    }
                    Err(e) => {
                        // Keep serving the previous snapshot; the next
                        // tick retries.
                        tracing::error!(error = %e, "Sidebar refresh failed");
                    }
                }
            }
        }
    }
}

/// Assemble a fresh snapshot from the repositories.
pub async fn build_snapshot(
    messages: &dyn MessageRepo,
    users: &dyn UserRepo,
) -> compliancehub_store::StoreResult<SidebarSnapshot> {
    let (recent, online) =
        tokio::join!(messages.recent(SIDEBAR_MESSAGE_LIMIT), users.online());
    let recent = recent?;
    let online = online?;

    let unread_count = messaging::unread_count(&recent, messaging::VIEWER_ID);

    Ok(SidebarSnapshot {
        messages: recent,
        online_users: online,
        unread_count,
        refreshed_at: Some(chrono::Utc::now()),
    })
}
