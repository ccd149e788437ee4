//! Automotive news feed types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The publication an article came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSource {
    pub name: String,
}

/// A news article shown on the home page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_to_image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub source: NewsSource,
    pub category: String,
}
