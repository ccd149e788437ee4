//! In-memory session state shared by the auth store and the API client.

use std::sync::{PoisonError, RwLock};

use partsmarket_core::UserProfile;

#[derive(Debug, Default)]
struct SessionData {
    token: Option<String>,
    user: Option<UserProfile>,
}

/// The current session: bearer token plus the logged-in user's profile.
///
/// Token and user live under a single lock and are replaced or cleared
/// wholesale, so a token-without-user state is never observable from other
/// code paths. Invariant: `user` is non-null iff `token` is non-null.
#[derive(Debug, Default)]
pub struct Session {
    data: RwLock<SessionData>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current bearer token, if logged in.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    /// The logged-in user's profile, if any.
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.read().user.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    /// Replace the whole session in one step.
    pub fn replace(&self, token: String, user: UserProfile) {
        *self.write() = SessionData {
            token: Some(token),
            user: Some(user),
        };
    }

    /// Replace only the user profile, keeping the token.
    ///
    /// Only meaningful while authenticated (e.g. after a profile update
    /// where the server returned the authoritative representation).
    pub fn set_user(&self, user: UserProfile) {
        self.write().user = Some(user);
    }

    /// Drop token and user together.
    pub fn clear(&self) {
        *self.write() = SessionData::default();
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionData> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionData> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}
