use compliancehub_core::types::DbId;

/// Errors a repository implementation may surface.
///
/// The in-memory store only ever reports `NotFound`; `Unavailable` exists
/// for real backends whose fetches can be rejected or time out.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
