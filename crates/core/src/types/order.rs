//! Order history types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A line item inside a past order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
}

/// A completed or pending order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend-assigned order code (e.g. "ORDER001").
    pub id: String,
    pub date: DateTime<Utc>,
    pub total: Decimal,
    /// Backend-defined status label (e.g. "Concluído", "Pendente").
    pub status: String,
    pub items: Vec<OrderItem>,
}
