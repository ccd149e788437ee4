//! User profile and authentication payload types.

use serde::{Deserialize, Serialize};

use crate::types::id::UserId;

/// A user profile as returned by the backend.
///
/// The logged-in user's profile is owned by the session; read-only copies
/// of other users' profiles (e.g. sellers) live in the user store and are
/// never mutated after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Backend-assigned role label, when any (e.g. "seller").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Login credentials sent to `POST /Auth/login`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Profile fields sent to the per-user update endpoint.
///
/// The server's returned representation is authoritative; the client never
/// merges this patch locally.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: String,
    pub email: String,
}
