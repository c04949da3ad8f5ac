//! Cart entry domain type.

use serde::{Deserialize, Serialize};

use elegantshop_core::{Price, ProductId};

use super::product::Product;

/// A line in the shopping cart.
///
/// A cart entry is a product snapshot plus the shopper's selections. Entries
/// are identified by the (product id, size, color) triple: adding the same
/// product in the same size and color merges quantities instead of creating
/// a second line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// The product this line refers to, copied at add time.
    #[serde(flatten)]
    pub product: Product,
    /// How many units. Always >= 1; dropping to zero removes the line.
    pub quantity: u32,
    /// Chosen size.
    pub selected_size: String,
    /// Chosen color.
    pub selected_color: String,
}

impl CartItem {
    /// Whether this line matches the given identity triple.
    #[must_use]
    pub fn matches(&self, product_id: &ProductId, size: &str, color: &str) -> bool {
        self.product.id == *product_id
            && self.selected_size == size
            && self.selected_color == color
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}
