//! Verification request entities, lifecycle enums, and submission DTOs.
//!
//! A request is created as `Pending` with `created_at = now` and an empty
//! document list. Status changes arrive as plain patches from the caller;
//! there is no transition state machine beyond the enum itself.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Lifecycle state of a verification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Active,
    Completed,
    Rejected,
}

impl RequestStatus {
    /// Wire/display form of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Active => "active",
            RequestStatus::Completed => "completed",
            RequestStatus::Rejected => "rejected",
        }
    }
}

/// Handling priority chosen at submission time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    #[default]
    Standard,
    Priority,
    Urgent,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Standard => "standard",
            Urgency::Priority => "priority",
            Urgency::Urgent => "urgent",
        }
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A submitted verification request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: DbId,
    pub service_id: DbId,
    pub candidate_name: String,
    pub candidate_email: String,
    #[serde(default)]
    pub candidate_phone: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub notes: String,
    pub status: RequestStatus,
    pub urgency: Urgency,
    pub created_at: Timestamp,
    /// Set only once the request reaches `Completed`.
    pub completed_at: Option<Timestamp>,
    /// Attachment references, in upload order. May be empty.
    #[serde(default)]
    pub documents: Vec<String>,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Submission payload for a new verification request.
///
/// Name and email are the only required fields; everything else defaults
/// to empty / `Standard`, matching the submission form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRequest {
    pub service_id: DbId,
    #[validate(length(min = 1, message = "candidate_name is required"))]
    pub candidate_name: String,
    #[validate(email(message = "candidate_email must be a valid email"))]
    pub candidate_email: String,
    #[serde(default)]
    pub candidate_phone: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub urgency: Urgency,
}

/// Partial update for a request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestPatch {
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
    pub candidate_phone: Option<String>,
    pub reference: Option<String>,
    pub notes: Option<String>,
    pub status: Option<RequestStatus>,
    pub urgency: Option<Urgency>,
    pub completed_at: Option<Timestamp>,
    pub documents: Option<Vec<String>>,
}

impl Request {
    pub fn apply_patch(&mut self, patch: &RequestPatch) {
        if let Some(candidate_name) = &patch.candidate_name {
            self.candidate_name = candidate_name.clone();
        }
        if let Some(candidate_email) = &patch.candidate_email {
            self.candidate_email = candidate_email.clone();
        }
        if let Some(candidate_phone) = &patch.candidate_phone {
            self.candidate_phone = candidate_phone.clone();
        }
        if let Some(reference) = &patch.reference {
            self.reference = reference.clone();
        }
        if let Some(notes) = &patch.notes {
            self.notes = notes.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(urgency) = patch.urgency {
            self.urgency = urgency;
        }
        if let Some(completed_at) = patch.completed_at {
            self.completed_at = Some(completed_at);
        }
        if let Some(documents) = &patch.documents {
            self.documents = documents.clone();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
