//! Premium account endpoints.
//!
//! The premium endpoints are not mounted under the same prefix on every
//! deployment: when the configured base URL already ends in `/api` the
//! resource lives at `/premiumaccount`, otherwise at `/api/premiumaccount`.
//! The path is derived once at construction.

use partsmarket_core::{PremiumDetails, PremiumStatus};

use crate::api::{self, ApiClient};
use crate::error::Result;

/// Wrapper around the backend premium account resource.
#[derive(Clone)]
pub struct PremiumService {
    api: ApiClient,
    base_path: String,
}

impl PremiumService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        let base_path = premium_base_path(api.base_url());
        Self { api, base_path }
    }

    /// Fetch plan details (price, duration, benefits).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn get_details(&self) -> Result<PremiumDetails> {
        let response = self
            .api
            .get(&format!("{}/details", self.base_path))
            .send()
            .await?;
        let response = api::into_api_result(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch the current user's subscription status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn get_status(&self) -> Result<PremiumStatus> {
        let response = self
            .api
            .get(&format!("{}/status", self.base_path))
            .send()
            .await?;
        let response = api::into_api_result(response).await?;
        Ok(response.json().await?)
    }

    /// Activate a subscription for `duration_days`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn activate(&self, duration_days: i64) -> Result<PremiumStatus> {
        let body = serde_json::json!({ "durationDays": duration_days });
        let response = self
            .api
            .post(&format!("{}/activate", self.base_path))
            .json(&body)
            .send()
            .await?;
        let response = api::into_api_result(response).await?;
        Ok(response.json().await?)
    }

    /// Cancel the current subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn cancel(&self) -> Result<PremiumStatus> {
        let response = self
            .api
            .post(&format!("{}/cancel", self.base_path))
            .send()
            .await?;
        let response = api::into_api_result(response).await?;
        Ok(response.json().await?)
    }
}

/// Derive the premium resource path from the configured base URL.
fn premium_base_path(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/api/premiumaccount".to_string();
    }
    if trimmed.to_lowercase().ends_with("/api") {
        "/premiumaccount".to_string()
    } else {
        "/api/premiumaccount".to_string()
    }
}
