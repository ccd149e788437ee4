//! Read-only cache of other users' profiles.
//!
//! Used to resolve seller display names on product cards. Entries are
//! created once and never mutated afterwards, which is why this cache can
//! be a bounded `moka` cache rather than the product store's flat map.

use moka::future::Cache;
use tracing::{debug, error, instrument};

use partsmarket_core::{UserId, UserProfile};

use crate::api::{self, ApiClient};
use crate::error::Result;

/// Bound for long-lived processes; a browser tab would never get here.
const USER_CACHE_CAPACITY: u64 = 10_000;

/// Cache of user profiles keyed by id.
pub struct UserStore {
    api: ApiClient,
    users: Cache<UserId, UserProfile>,
}

impl UserStore {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            users: Cache::builder().max_capacity(USER_CACHE_CAPACITY).build(),
        }
    }

    /// Fetch a user profile, cache-first.
    ///
    /// On failure the error is logged and `None` returned; nothing negative
    /// is cached, so the next call retries.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn fetch_user_by_id(&self, user_id: UserId) -> Option<UserProfile> {
        if let Some(user) = self.users.get(&user_id).await {
            debug!("Cache hit for user");
            return Some(user);
        }

        let result: Result<UserProfile> = async {
            let response = self.api.get(&format!("/User/{user_id}")).send().await?;
            let response = api::into_api_result(response).await?;
            Ok(response.json().await?)
        }
        .await;

        match result {
            Ok(user) => {
                self.users.insert(user_id, user.clone()).await;
                Some(user)
            }
            Err(err) => {
                error!("Erro ao buscar usuário com ID {user_id}: {err}");
                None
            }
        }
    }
}
