//! Authentication service.
//!
//! The demo shop has no real identity backend: any credentials are accepted
//! and a user record is fabricated. That behavior is isolated behind the
//! [`AuthProvider`] trait so the store's call sites never know whether they
//! are talking to the mock or to a real provider.

mod error;

pub use error::AuthError;

use elegantshop_core::{AddressId, Email, UserId};

use crate::models::{Address, User};

/// An identity provider.
///
/// Implementations validate credentials and produce the resulting user
/// profile. The store funnels its `login`/`signup` operations through this
/// trait; swapping the mock for a real provider touches nothing else.
pub trait AuthProvider {
    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email is malformed, or
    /// `AuthError::InvalidCredentials` from providers that actually check.
    fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Create an account with name, email, and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email is malformed, or
    /// `AuthError::UserAlreadyExists` from providers that keep accounts.
    fn signup(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError>;
}

/// The demo identity provider.
///
/// Ignores the password entirely. `login` fabricates a fixed demo profile
/// carrying the given email; `signup` builds a bare profile from the given
/// name and email.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAuthProvider;

impl AuthProvider for MockAuthProvider {
    fn login(&self, email: &str, _password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        Ok(User {
            id: UserId::new("1"),
            name: "Priya Sharma".to_string(),
            email,
            phone: "+91 98765 43210".to_string(),
            addresses: vec![Address {
                id: AddressId::new("1"),
                name: "Priya Sharma".to_string(),
                phone: "+91 98765 43210".to_string(),
                address: "Flat 301, Green Valley Apartments, MG Road".to_string(),
                city: "Bangalore".to_string(),
                state: "Karnataka".to_string(),
                pincode: "560001".to_string(),
                is_default: true,
            }],
        })
    }

    fn signup(&self, name: &str, email: &str, _password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        Ok(User {
            id: UserId::new("1"),
            name: name.to_string(),
            email,
            phone: String::new(),
            addresses: Vec::new(),
        })
    }
}
