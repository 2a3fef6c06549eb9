//! Repository for the verification request ledger.

use async_trait::async_trait;
use chrono::Utc;
use compliancehub_core::request::{CreateRequest, Request, RequestPatch, RequestStatus};
use compliancehub_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::StoreResult;

/// CRUD surface for verification requests.
#[async_trait]
pub trait RequestRepo: Send + Sync {
    /// Snapshot of the ledger, in submission order.
    async fn list(&self) -> StoreResult<Vec<Request>>;

    async fn get(&self, id: DbId) -> StoreResult<Option<Request>>;

    /// Record a submission. The store assigns the id and applies the
    /// submission defaults: `Pending` status, `created_at = now`, no
    /// completion instant, no documents.
    async fn create(&self, input: CreateRequest) -> StoreResult<Request>;

    async fn update(&self, id: DbId, patch: &RequestPatch) -> StoreResult<Option<Request>>;

    async fn delete(&self, id: DbId) -> StoreResult<bool>;
}

/// In-memory ledger seeded at construction.
pub struct InMemoryRequests {
    items: RwLock<Vec<Request>>,
}

impl InMemoryRequests {
    pub fn new(seed: Vec<Request>) -> Self {
        Self {
            items: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl RequestRepo for InMemoryRequests {
    async fn list(&self) -> StoreResult<Vec<Request>> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: DbId) -> StoreResult<Option<Request>> {
        Ok(self.items.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, input: CreateRequest) -> StoreResult<Request> {
        let mut items = self.items.write().await;
        let id = items.iter().map(|r| r.id).max().unwrap_or(0) + 1;

        let request = Request {
            id,
            service_id: input.service_id,
            candidate_name: input.candidate_name,
            candidate_email: input.candidate_email,
            candidate_phone: input.candidate_phone,
            reference: input.reference,
            notes: input.notes,
            status: RequestStatus::Pending,
            urgency: input.urgency,
            created_at: Utc::now(),
            completed_at: None,
            documents: Vec::new(),
        };
        items.push(request.clone());
        Ok(request)
    }

    async fn update(&self, id: DbId, patch: &RequestPatch) -> StoreResult<Option<Request>> {
        let mut items = self.items.write().await;
        let Some(request) = items.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        request.apply_patch(patch);
        Ok(Some(request.clone()))
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|r| r.id != id);
        Ok(items.len() < before)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
