//! ElegantShop Core - Shared types library.
//!
//! This crate provides common types used across all ElegantShop components:
//! - `storefront` - The headless storefront engine (catalog, cart, orders)
//! - `integration-tests` - End-to-end tests over the engine
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
