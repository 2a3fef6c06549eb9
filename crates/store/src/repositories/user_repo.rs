//! Repository for team members shown in the messaging sidebar.

use async_trait::async_trait;
use compliancehub_core::messaging::{PresenceStatus, User};
use compliancehub_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::StoreResult;

#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn list(&self) -> StoreResult<Vec<User>>;

    /// Members currently online, in roster order.
    async fn online(&self) -> StoreResult<Vec<User>>;

    async fn get(&self, id: DbId) -> StoreResult<Option<User>>;
}

pub struct InMemoryUsers {
    items: RwLock<Vec<User>>,
}

impl InMemoryUsers {
    pub fn new(seed: Vec<User>) -> Self {
        Self {
            items: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl UserRepo for InMemoryUsers {
    async fn list(&self) -> StoreResult<Vec<User>> {
        Ok(self.items.read().await.clone())
    }

    async fn online(&self) -> StoreResult<Vec<User>> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .filter(|u| u.status == PresenceStatus::Online)
            .cloned()
            .collect())
    }

    async fn get(&self, id: DbId) -> StoreResult<Option<User>> {
        Ok(self.items.read().await.iter().find(|u| u.id == id).cloned())
    }
}
