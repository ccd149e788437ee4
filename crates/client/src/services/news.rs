//! Automotive news feed endpoints and display helpers.

use chrono::{DateTime, Utc};

use partsmarket_core::NewsArticle;

use crate::api::{self, ApiClient};
use crate::error::Result;

/// How many articles the home page asks for by default.
pub const DEFAULT_NEWS_LIMIT: usize = 6;

/// Default cut-off for [`truncate_text`].
pub const DEFAULT_TRUNCATE_LENGTH: usize = 120;

/// Wrapper around the backend news resource.
#[derive(Clone)]
pub struct NewsService {
    api: ApiClient,
}

impl NewsService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch up to `limit` news articles.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn get_news(&self, limit: usize) -> Result<Vec<NewsArticle>> {
        let response = self
            .api
            .get("/news")
            .query(&[("limit", limit)])
            .send()
            .await?;
        let response = api::into_api_result(response).await?;
        Ok(response.json().await?)
    }
}

/// Format a date the Brazilian way: dd/mm/yyyy.
#[must_use]
pub fn format_date_br(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Truncate `text` to at most `max_length` characters, appending an
/// ellipsis when anything was cut.
#[must_use]
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_length).collect();
    format!("{truncated}...")
}
