//! Order domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use elegantshop_core::{OrderId, OrderStatus, Price};

use super::cart::CartItem;
use super::user::Address;
use crate::pricing::OrderCharges;

/// A placed order.
///
/// Orders are immutable after creation except for `status`. The `items` field
/// is a snapshot of the cart at placement time and is unaffected by later
/// cart mutations. Order history is kept newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID (generated, `ORD-` prefixed).
    pub id: OrderId,
    /// When the order was placed.
    pub date: DateTime<Utc>,
    /// Cart snapshot captured at placement time.
    pub items: Vec<CartItem>,
    /// Sum of item line totals (excludes tax and delivery; see `charges`).
    pub total: Price,
    /// The full checkout breakdown. `charges.grand_total` is the amount the
    /// shopper pays; nothing outside the pricing module derives it.
    pub charges: OrderCharges,
    /// Fulfillment status. Confirmed immediately on placement.
    pub status: OrderStatus,
    /// Shipping address.
    pub address: Address,
    /// Payment method label chosen at checkout (e.g., "upi", "card", "cod").
    pub payment_method: String,
}
