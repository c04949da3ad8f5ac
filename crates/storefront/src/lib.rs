//! ElegantShop Storefront - headless storefront engine.
//!
//! This crate is the in-process core of the ElegantShop demo storefront:
//! a read-only product catalog, a shopping cart and wishlist, a pluggable
//! (mocked) authentication flow, and a mocked checkout flow producing local
//! order records and notifications.
//!
//! # Architecture
//!
//! - [`store::ShopStore`] is the single in-memory source of truth. It is
//!   constructed once at startup, hydrates saved state from storage, and every
//!   mutation goes through one of its named operations.
//! - [`persistence`] mirrors the cart, wishlist, user, and order history to a
//!   local key-value store after each mutation (explicit "mutate, then
//!   persist" sequencing). Writes are best-effort: a failed write is logged
//!   and never blocks the mutation.
//! - [`catalog`] is a fixed in-memory product set with filter/sort queries.
//! - [`services::auth`] isolates the demo login behind an [`services::auth::AuthProvider`]
//!   trait so a real identity provider can be swapped in without touching the
//!   store's call sites.
//!
//! There is no network I/O anywhere in this crate: every store operation runs
//! to completion synchronously, and the in-memory state is always the
//! consistency source of truth (storage is only consulted at startup).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod pricing;
pub mod services;
pub mod store;

pub use catalog::Catalog;
pub use config::ShopConfig;
pub use error::{Result, StoreError};
pub use store::ShopStore;
