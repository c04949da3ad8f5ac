//! Checkout pricing.
//!
//! All pricing math lives here. The store's order total (sum of item line
//! totals) and the tax/delivery-inclusive amount the shopper actually pays
//! are both computed by [`quote`], so the presentation layer never re-derives
//! charges on its own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use elegantshop_core::{CurrencyCode, Price};

use crate::models::CartItem;

/// Checkout pricing rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    /// GST applied to the item subtotal.
    pub gst_rate: Decimal,
    /// Flat delivery charge below the free-delivery threshold.
    pub delivery_charge: Decimal,
    /// Orders with a subtotal strictly above this ship free.
    pub free_delivery_threshold: Decimal,
    /// Currency every charge is denominated in.
    pub currency: CurrencyCode,
}

impl Default for PricingConfig {
    /// 18% GST, ₹99 delivery, free delivery above ₹999.
    fn default() -> Self {
        Self {
            gst_rate: Decimal::new(18, 2),
            delivery_charge: Decimal::from(99),
            free_delivery_threshold: Decimal::from(999),
            currency: CurrencyCode::INR,
        }
    }
}

/// The full charge breakdown for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCharges {
    /// Sum of item line totals.
    pub subtotal: Price,
    /// GST on the subtotal, rounded to two decimal places.
    pub gst: Price,
    /// Delivery charge; zero when the subtotal clears the threshold.
    pub delivery: Price,
    /// What the shopper pays: subtotal + gst + delivery.
    pub grand_total: Price,
}

/// Compute the charge breakdown for the given cart contents.
#[must_use]
pub fn quote(items: &[CartItem], config: &PricingConfig) -> OrderCharges {
    let currency = config.currency;
    let subtotal: Decimal = items.iter().map(|item| item.line_total().amount).sum();

    let gst = (subtotal * config.gst_rate).round_dp(2);

    let delivery = if subtotal > config.free_delivery_threshold {
        Price::zero(currency)
    } else {
        Price::new(config.delivery_charge, currency)
    };

    OrderCharges {
        subtotal: Price::new(subtotal, currency),
        gst: Price::new(gst, currency),
        delivery,
        grand_total: Price::new(subtotal + gst + delivery.amount, currency),
    }
}
