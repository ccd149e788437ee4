//! Configured HTTP client for the marketplace REST API.
//!
//! One request interceptor, one response rule:
//! - every outgoing request gets `Authorization: Bearer <token>` when the
//!   session holds a token (and nothing when it does not); this can never
//!   fail;
//! - responses pass through unchanged. Callers that want non-2xx statuses
//!   turned into [`Error::Api`] opt in via [`into_api_result`]; nothing is
//!   retried or transformed on their behalf.

use std::sync::Arc;

use indexmap::IndexMap;
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::session::Session;

/// Client for the marketplace REST API.
///
/// Cheaply cloneable; all clones share one `reqwest::Client` and one
/// [`Session`].
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    /// Create a new API client bound to `session` for token lookup.
    #[must_use]
    pub fn new(config: &ClientConfig, session: Arc<Session>) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base_url: config.api_base_url.clone(),
                session,
            }),
        }
    }

    /// Base URL requests are issued against (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Build a request for `path` (which must start with `/`).
    ///
    /// Attaches the session's bearer token when one is present. Header
    /// injection cannot fail: the headers map always exists on the builder.
    #[must_use]
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.inner.base_url, path);
        let builder = self.inner.http.request(method, url);

        match self.inner.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    #[must_use]
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    #[must_use]
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    #[must_use]
    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    #[must_use]
    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }
}

/// Conventional REST error body: `{ "message": …, "errors": {field: [msgs]} }`.
/// Both fields are optional; anything unparsable is treated as absent. The
/// `errors` map keeps the payload's field order.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    errors: Option<IndexMap<String, Vec<String>>>,
}

/// Turn a non-success response into [`Error::Api`], reading whatever the
/// server said about the failure. Success responses pass through untouched.
///
/// # Errors
///
/// Returns `Error::Api` for any non-2xx status.
pub async fn into_api_result(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    tracing::debug!(
        status = %status,
        body = %text.chars().take(500).collect::<String>(),
        "API returned non-success status"
    );

    let body: ApiErrorBody = serde_json::from_str(&text).unwrap_or_default();

    Err(Error::Api {
        status,
        message: body.message,
        field_errors: body.errors.unwrap_or_default(),
    })
}
