//! Favorite services, pinned per installation.
//!
//! The set of favorite service ids lives in memory and is mirrored to a
//! single JSON file so it survives restarts. The in-memory set is
//! authoritative for the running session: a failed write is logged and
//! reported, never propagated; the toggle itself always succeeds.

use std::collections::BTreeSet;
use std::path::PathBuf;

use compliancehub_core::types::DbId;
use tokio::sync::RwLock;

/// Result of flipping a service's favorite flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub service_id: DbId,
    /// Whether the service is a favorite after the toggle.
    pub favorite: bool,
    /// Whether the new set reached the backing file.
    pub persisted: bool,
}

/// Id set with fire-and-forget file persistence.
pub struct FavoriteStore {
    /// Backing file. `None` keeps the set session-only (used in tests).
    path: Option<PathBuf>,
    ids: RwLock<BTreeSet<DbId>>,
}

impl FavoriteStore {
    /// Open the store, reading the backing file if it exists.
    ///
    /// An absent file is an empty set. An unreadable or malformed file is
    /// logged and treated as empty rather than failing startup.
    pub async fn open(path: Option<PathBuf>) -> Self {
        let ids = match &path {
            Some(p) => match tokio::fs::read(p).await {
                Ok(bytes) => match serde_json::from_slice::<Vec<DbId>>(&bytes) {
                    Ok(list) => list.into_iter().collect(),
                    Err(e) => {
                        tracing::warn!(path = %p.display(), error = %e, "Favorites file unreadable, starting empty");
                        BTreeSet::new()
                    }
                },
                Err(_) => BTreeSet::new(),
            },
            None => BTreeSet::new(),
        };

        Self {
            path,
            ids: RwLock::new(ids),
        }
    }

    /// Session-only store with no backing file.
    pub fn ephemeral() -> Self {
        Self {
            path: None,
            ids: RwLock::new(BTreeSet::new()),
        }
    }

    /// Current favorites, ascending by id.
    pub async fn list(&self) -> Vec<DbId> {
        self.ids.read().await.iter().copied().collect()
    }

    pub async fn contains(&self, service_id: DbId) -> bool {
        self.ids.read().await.contains(&service_id)
    }

    /// Flip a service's favorite flag: present is removed, absent is
    /// added. Two toggles in a row restore the original set.
    pub async fn toggle(&self, service_id: DbId) -> ToggleOutcome {
        let snapshot: Vec<DbId> = {
            let mut ids = self.ids.write().await;
            if !ids.insert(service_id) {
                ids.remove(&service_id);
            }
            ids.iter().copied().collect()
        };

        let favorite = snapshot.contains(&service_id);
        let persisted = self.save(&snapshot).await;

        ToggleOutcome {
            service_id,
            favorite,
            persisted,
        }
    }

    /// Write the set to the backing file. Returns whether the write
    /// landed; failures are logged and the in-memory set stays as-is.
    async fn save(&self, snapshot: &[DbId]) -> bool {
        let Some(path) = &self.path else {
            return true;
        };

        let bytes = match serde_json::to_vec(snapshot) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, "Favorites set failed to serialize");
                return false;
            }
        };

        match tokio::fs::write(path, bytes).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Favorites write failed, keeping in-memory set");
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
