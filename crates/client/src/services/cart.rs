//! Cart resource endpoints.

use partsmarket_core::{CartItemId, CartSnapshot, ProductId};

use crate::api::{self, ApiClient};
use crate::error::Result;

/// Wrapper around the backend cart resource.
#[derive(Clone)]
pub struct CartService {
    api: ApiClient,
}

impl CartService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the server's authoritative cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn get_cart(&self) -> Result<CartSnapshot> {
        let response = self.api.get("/cart").send().await?;
        let response = api::into_api_result(response).await?;
        Ok(response.json().await?)
    }

    /// Add `quantity` of a product to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn add_item(&self, product_id: ProductId, quantity: u32) -> Result<()> {
        let body = serde_json::json!({
            "productId": product_id,
            "quantity": quantity,
        });
        let response = self.api.post("/cart/add").json(&body).send().await?;
        api::into_api_result(response).await?;
        Ok(())
    }

    /// Remove one cart line item by its cart item id (not the product id).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn remove_item(&self, item_id: CartItemId) -> Result<()> {
        let response = self
            .api
            .delete(&format!("/cart/item/{item_id}"))
            .send()
            .await?;
        api::into_api_result(response).await?;
        Ok(())
    }
}
