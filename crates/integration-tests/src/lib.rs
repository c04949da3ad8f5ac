//! Integration tests for ElegantShop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p elegantshop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shop_flow` - Full shopping sessions over the store
//! - `hydration` - Saved state surviving store restarts
//!
//! The tests drive [`elegantshop_storefront::ShopStore`] directly; there is
//! no server to stand up. File-backed tests write under a [`tempfile`]
//! directory so runs never interfere with each other.

pub use elegantshop_storefront::{ShopConfig, ShopStore};

use std::path::Path;

use elegantshop_storefront::Catalog;
use elegantshop_storefront::persistence::FileBackend;
use elegantshop_storefront::services::auth::MockAuthProvider;

/// Open a store persisting under `dir`, with defaults for everything else.
#[must_use]
pub fn open_store_at(dir: &Path) -> ShopStore {
    ShopStore::with_parts(
        Catalog::new(),
        Box::new(FileBackend::new(dir)),
        Box::new(MockAuthProvider),
        ShopConfig::default(),
    )
}
