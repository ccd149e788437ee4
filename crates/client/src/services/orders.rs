//! Order history endpoints.

use partsmarket_core::Order;

use crate::api::{self, ApiClient};
use crate::error::Result;

/// Wrapper around the backend orders resource.
#[derive(Clone)]
pub struct OrdersService {
    api: ApiClient,
}

impl OrdersService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the current user's order history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn get_orders(&self) -> Result<Vec<Order>> {
        let response = self.api.get("/orders").send().await?;
        let response = api::into_api_result(response).await?;
        Ok(response.json().await?)
    }
}
