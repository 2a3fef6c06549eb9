//! Repository for the verification service catalog.

use async_trait::async_trait;
use compliancehub_core::service::{NewService, Service, ServicePatch};
use compliancehub_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::StoreResult;

/// CRUD surface for the service catalog.
#[async_trait]
pub trait ServiceRepo: Send + Sync {
    /// Snapshot of the full catalog, in insertion order.
    async fn list(&self) -> StoreResult<Vec<Service>>;

    async fn get(&self, id: DbId) -> StoreResult<Option<Service>>;

    /// Add a service; the store assigns the next free id.
    async fn create(&self, input: NewService) -> StoreResult<Service>;

    /// Merge a patch into an existing service. `None` when the id is
    /// unknown.
    async fn update(&self, id: DbId, patch: &ServicePatch) -> StoreResult<Option<Service>>;

    /// Remove a service. `false` when the id is unknown.
    async fn delete(&self, id: DbId) -> StoreResult<bool>;
}

/// In-memory catalog seeded at construction.
pub struct InMemoryServices {
    items: RwLock<Vec<Service>>,
}

impl InMemoryServices {
    pub fn new(seed: Vec<Service>) -> Self {
        Self {
            items: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl ServiceRepo for InMemoryServices {
    async fn list(&self) -> StoreResult<Vec<Service>> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: DbId) -> StoreResult<Option<Service>> {
        Ok(self.items.read().await.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, input: NewService) -> StoreResult<Service> {
        let mut items = self.items.write().await;
        let id = items.iter().map(|s| s.id).max().unwrap_or(0) + 1;

        let service = Service {
            id,
            name: input.name,
            description: input.description,
            category: input.category,
            icon: input.icon,
            processing_time: input.processing_time,
            cost: input.cost,
            request_count: input.request_count,
        };
        items.push(service.clone());
        Ok(service)
    }

    async fn update(&self, id: DbId, patch: &ServicePatch) -> StoreResult<Option<Service>> {
        let mut items = self.items.write().await;
        let Some(service) = items.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        service.apply_patch(patch);
        Ok(Some(service.clone()))
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|s| s.id != id);
        Ok(items.len() < before)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
