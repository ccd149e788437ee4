//! Product and review types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::{ProductId, ReviewId, UserId};

/// A marketplace product.
///
/// `reviews` is lazy: it is absent until explicitly fetched, after which the
/// product store attaches it in place. Identity fields never change once the
/// product is cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i64,
    pub category: String,
    /// Vehicle model the part fits (e.g. "Gol G5 1.0").
    pub compatible_model: String,
    pub seller_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Absent until fetched; newest-first once populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

/// A product review. Append-only per product from the client's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    /// Star rating, 1-5.
    pub rating: i32,
    pub comment: String,
    pub user_id: UserId,
}

/// An image attached to a multipart submission.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    /// MIME type, e.g. "image/jpeg".
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Payload for publishing a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i64,
    pub category: String,
    pub compatible_model: String,
    pub image: Option<ImageUpload>,
}

/// Payload for publishing a new review.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub product_id: ProductId,
    pub rating: i32,
    pub comment: String,
}
