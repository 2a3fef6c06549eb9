//! Messaging sidebar entities: messages, team members, presence.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// The seeded user the dashboard is rendered for. Messages sent through
/// the API are attributed to this id until real accounts exist.
pub const VIEWER_ID: DbId = 0;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// Presence state of a team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStatus {
    Online,
    Away,
    Offline,
}

/// A team member shown in the messaging sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub avatar: Option<String>,
    pub status: PresenceStatus,
}

/// A chat message in the sidebar conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: DbId,
    pub sender_id: DbId,
    pub sender_name: String,
    pub text: String,
    pub timestamp: Timestamp,
    pub is_read: bool,
}

/// Payload for sending a message from the dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMessage {
    pub text: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Number of unread messages from other senders.
///
/// The viewer's own messages never count as unread, whatever their flag.
pub fn unread_count(messages: &[Message], viewer_id: DbId) -> usize {
    messages
        .iter()
        .filter(|m| !m.is_read && m.sender_id != viewer_id)
        .count()
}
