//! Session lifecycle: login, logout, profile updates.
//!
//! Two states, Anonymous (no token) and Authenticated. Transitions always
//! move token and user together - a token-without-user state is never
//! visible, in memory or in durable storage.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{error, instrument};

use partsmarket_core::{Credentials, ProfilePatch, UserProfile};

use crate::api::{self, ApiClient};
use crate::error::{Error, Result};
use crate::session::Session;
use crate::storage::{KeyValueStorage, TOKEN_KEY, USER_KEY};
use crate::ui::{Route, UiHooks};

const PROFILE_UPDATE_FALLBACK: &str = "Falha ao atualizar perfil";

/// Expected shape of a successful login response. Both fields must be
/// present; a payload missing either is rejected as invalid.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: Option<String>,
    user: Option<UserProfile>,
}

/// Owns the session token and user profile, persisting both durably.
pub struct AuthStore {
    api: ApiClient,
    session: Arc<Session>,
    storage: Arc<dyn KeyValueStorage>,
    ui: Arc<dyn UiHooks>,
}

impl AuthStore {
    /// Create the store and restore any persisted session.
    #[must_use]
    pub fn new(
        api: ApiClient,
        session: Arc<Session>,
        storage: Arc<dyn KeyValueStorage>,
        ui: Arc<dyn UiHooks>,
    ) -> Self {
        let store = Self {
            api,
            session,
            storage,
            ui,
        };
        store.restore_session();
        store
    }

    /// Populate the session from durable storage.
    ///
    /// A token without a decodable user (or the reverse) clears both, so the
    /// user-iff-token invariant holds from the first read.
    fn restore_session(&self) {
        let token = self.storage.get(TOKEN_KEY);
        let user = self
            .storage
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<UserProfile>(&raw).ok());

        match (token, user) {
            (Some(token), Some(user)) => self.session.replace(token, user),
            (None, None) => {}
            _ => {
                self.session.clear();
                self.storage.remove(TOKEN_KEY);
                self.storage.remove(USER_KEY);
            }
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.session.user()
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token and user are stored in memory and durably, a
    /// welcome notice is emitted and the UI navigates home. A structurally
    /// invalid success payload rolls the session back to Anonymous before
    /// failing - never leave a partially-applied session behind.
    ///
    /// # Errors
    ///
    /// `Error::Authentication` when the server rejects the credentials,
    /// `Error::InvalidResponse` when the payload misses token or user,
    /// `Error::Network` on transport failure. Nothing is retried.
    #[instrument(skip(self, credentials))]
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        let response = self
            .api
            .post("/Auth/login")
            .json(credentials)
            .send()
            .await
            .inspect_err(|err| error!("Erro no login: {err}"))?;

        if !response.status().is_success() {
            error!(status = %response.status(), "Erro no login");
            return Err(Error::Authentication);
        }

        let body: LoginResponse = response
            .json()
            .await
            .inspect_err(|err| error!("Erro no login: {err}"))?;

        let (Some(token), Some(user)) = (body.token, body.user) else {
            self.session.clear();
            self.storage.remove(TOKEN_KEY);
            self.storage.remove(USER_KEY);
            error!("Erro no login: resposta sem token ou usuário");
            return Err(Error::InvalidResponse);
        };

        // Serialize before touching storage so a failure applies nothing.
        let user_json = serde_json::to_string(&user)?;
        self.storage.set(TOKEN_KEY, &token);
        self.storage.set(USER_KEY, &user_json);
        self.session.replace(token, user.clone());

        self.ui.notify_success(&format!("Bem-vindo, {}!", user.name));
        self.ui.navigate(Route::Home);
        Ok(())
    }

    /// Unconditionally drop the session, in memory and in storage, and
    /// navigate to the login route.
    pub fn logout(&self) {
        self.session.clear();
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.ui.navigate(Route::Login);
    }

    /// Send a profile patch to the per-user endpoint (PUT) and replace the
    /// local profile with the server's returned representation.
    ///
    /// # Errors
    ///
    /// `Error::NotAuthenticated` without issuing a request when there is no
    /// session; the original `Error::Api` when the server rejects the update
    /// (the most specific available message is shown first); `Error::Network`
    /// on transport failure. All failures are signaled through the UI hooks
    /// before being re-thrown.
    #[instrument(skip(self, patch))]
    pub async fn update_user_profile(&self, patch: &ProfilePatch) -> Result<UserProfile> {
        let Some(user) = self.session.user() else {
            self.ui
                .notify_error("Você não está autenticado ou seu ID não foi encontrado.");
            return Err(Error::NotAuthenticated);
        };

        let response = match self
            .api
            .put(&format!("/User/{}", user.id))
            .json(patch)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                error!("Erro ao atualizar perfil: {err}");
                self.ui.notify_error(PROFILE_UPDATE_FALLBACK);
                return Err(Error::Network(err));
            }
        };

        let response = match api::into_api_result(response).await {
            Ok(response) => response,
            Err(err) => {
                let message = err
                    .server_message()
                    .unwrap_or(PROFILE_UPDATE_FALLBACK)
                    .to_string();
                error!("Erro ao atualizar perfil: {message}");
                self.ui.notify_error(&message);
                return Err(err);
            }
        };

        let updated: UserProfile = match response.json().await {
            Ok(updated) => updated,
            Err(err) => {
                error!("Erro ao atualizar perfil: {err}");
                self.ui.notify_error(PROFILE_UPDATE_FALLBACK);
                return Err(Error::Network(err));
            }
        };

        let user_json = serde_json::to_string(&updated)?;
        self.storage.set(USER_KEY, &user_json);
        self.session.set_user(updated.clone());

        self.ui.notify_success("Perfil atualizado com sucesso!");
        Ok(updated)
    }
}
