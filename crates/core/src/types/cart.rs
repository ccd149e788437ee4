//! Cart line item types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::{CartItemId, ProductId};

/// The product summary embedded in a cart line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

/// A cart line item.
///
/// Cart identity is the cart item id, distinct from the product id. The
/// client does not enforce one-line-per-product; the backend owns that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub product: CartProduct,
}

/// The server's authoritative cart representation.
///
/// `items` may be absent; the cart store treats that as an empty cart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    #[serde(default)]
    pub items: Option<Vec<CartItem>>,
}
