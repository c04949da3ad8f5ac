//! Authentication error types.

use thiserror::Error;

use elegantshop_core::EmailError;

/// Errors from an [`super::AuthProvider`].
///
/// The mock provider only ever produces `InvalidEmail`; the other kinds exist
/// for real identity providers implementing the same trait.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email address is structurally invalid.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The email/password pair was rejected.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account with this email already exists.
    #[error("an account with this email already exists")]
    UserAlreadyExists,

    /// The identity provider could not be reached.
    #[error("identity provider unavailable: {0}")]
    ProviderUnavailable(String),
}
