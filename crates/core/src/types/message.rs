//! Direct messaging types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::UserId;

/// A conversation summary as listed in the messages widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Backend-assigned conversation id (e.g. "conv-1").
    pub id: String,
    pub participants: Vec<UserId>,
    pub last_message: String,
    pub last_timestamp: DateTime<Utc>,
    /// Unread message count for the current user.
    pub unread: u32,
}

/// A single message within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: UserId,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}
