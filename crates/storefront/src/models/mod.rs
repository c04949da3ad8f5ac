//! Domain types for the storefront engine.
//!
//! These are the serde-round-trippable entities held by the shop state store
//! and mirrored to persistent storage. Field names serialize in camelCase to
//! stay compatible with the storage payloads written by earlier versions of
//! the shop.

pub mod cart;
pub mod notification;
pub mod order;
pub mod product;
pub mod user;

pub use cart::CartItem;
pub use notification::Notification;
pub use order::Order;
pub use product::Product;
pub use user::{Address, User};
