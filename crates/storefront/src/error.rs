//! Unified error handling for the storefront engine.
//!
//! Provides a unified `StoreError` type covering every fallible path in the
//! engine. Operations that the store defines as silent no-ops (removing an
//! absent cart entry, marking an unknown notification as read) do not error;
//! the `NotFound` and `Conflict` kinds exist so a future real backend can
//! surface them without changing caller signatures.

use thiserror::Error;

use crate::persistence::StorageError;
use crate::services::auth::AuthError;

/// Application-level error type for the storefront engine.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input rejected before any state change (e.g., zero quantity,
    /// ordering from an empty cart).
    #[error("validation error: {0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An insert collided with an existing entity.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Storage operation failed.
    ///
    /// Only hydration-time failures surface through this variant; writes
    /// after a mutation are fire-and-forget and are logged instead.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
