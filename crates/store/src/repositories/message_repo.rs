//! Repository for the messaging sidebar conversation.

use async_trait::async_trait;
use chrono::Utc;
use compliancehub_core::messaging::{Message, VIEWER_ID};
use compliancehub_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::StoreResult;

/// Access surface for the sidebar conversation.
///
/// The conversation is kept newest-first; `recent` is a prefix of it.
#[async_trait]
pub trait MessageRepo: Send + Sync {
    async fn recent(&self, limit: usize) -> StoreResult<Vec<Message>>;

    /// Append a message from the dashboard viewer. Own messages are born
    /// read.
    async fn send(&self, text: String) -> StoreResult<Message>;

    /// Flag a message as read. `None` when the id is unknown.
    async fn mark_read(&self, id: DbId) -> StoreResult<Option<Message>>;
}

/// In-memory conversation seeded at construction, newest first.
pub struct InMemoryMessages {
    items: RwLock<Vec<Message>>,
}

impl InMemoryMessages {
    pub fn new(mut seed: Vec<Message>) -> Self {
        // Normalize whatever order the seed arrives in.
        seed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self {
            items: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl MessageRepo for InMemoryMessages {
    async fn recent(&self, limit: usize) -> StoreResult<Vec<Message>> {
        Ok(self.items.read().await.iter().take(limit).cloned().collect())
    }

    async fn send(&self, text: String) -> StoreResult<Message> {
        let mut items = self.items.write().await;
        let id = items.iter().map(|m| m.id).max().unwrap_or(0) + 1;

        let message = Message {
            id,
            sender_id: VIEWER_ID,
            sender_name: "You".to_string(),
            text,
            timestamp: Utc::now(),
            is_read: true,
        };
        items.insert(0, message.clone());
        Ok(message)
    }

    async fn mark_read(&self, id: DbId) -> StoreResult<Option<Message>> {
        let mut items = self.items.write().await;
        let Some(message) = items.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        message.is_read = true;
        Ok(Some(message.clone()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
