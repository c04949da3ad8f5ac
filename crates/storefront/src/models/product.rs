//! Product domain type.

use serde::{Deserialize, Serialize};

use elegantshop_core::{Price, ProductId};

/// A catalog product.
///
/// Products are immutable and owned by the [`crate::catalog::Catalog`]; the
/// store only ever copies them (into cart entries and wishlist entries),
/// never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Current selling price.
    pub price: Price,
    /// Pre-discount price, if the product is discounted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Discount percentage, if the product is discounted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
    /// Primary image URL.
    pub image: String,
    /// Alternate image shown on hover, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_image: Option<String>,
    /// Top-level category (e.g., "Women", "Footwear").
    pub category: String,
    /// Sub-category within the category, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    /// Available sizes, in display order.
    pub sizes: Vec<String>,
    /// Available colors, in display order.
    pub colors: Vec<String>,
    /// Average review rating (0.0 - 5.0).
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Long-form description.
    pub description: String,
    /// Whether the product can currently be purchased.
    pub in_stock: bool,
}
