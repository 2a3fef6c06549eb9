//! Verification service catalog entities and DTOs.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A verification or compliance service offered to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: DbId,
    pub name: String,
    /// May be absent in older catalog exports; treated as empty.
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// Icon token consumed by the frontend; opaque to this crate.
    #[serde(default)]
    pub icon: String,
    /// Human-readable turnaround estimate, e.g. "2-3 business days".
    #[serde(default)]
    pub processing_time: String,
    pub cost: f64,
    /// Open request tally for this service. Negative values signal an
    /// error state upstream and are preserved, not clamped, here.
    pub request_count: i64,
}

/// DTO for adding a service to the catalog. The store assigns the id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewService {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub processing_time: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub request_count: i64,
}

/// Partial update for a service. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServicePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub processing_time: Option<String>,
    pub cost: Option<f64>,
    pub request_count: Option<i64>,
}

impl Service {
    /// Merge a patch into this service, overwriting only the fields the
    /// patch sets.
    pub fn apply_patch(&mut self, patch: &ServicePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(icon) = &patch.icon {
            self.icon = icon.clone();
        }
        if let Some(processing_time) = &patch.processing_time {
            self.processing_time = processing_time.clone();
        }
        if let Some(cost) = patch.cost {
            self.cost = cost;
        }
        if let Some(request_count) = patch.request_count {
            self.request_count = request_count;
        }
    }
}
