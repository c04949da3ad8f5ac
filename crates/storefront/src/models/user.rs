//! User and address domain types.
//!
//! A `User` exists only while "logged in"; logout destroys it. There is no
//! credential storage here - authentication is behind the
//! [`crate::services::auth::AuthProvider`] seam.

use serde::{Deserialize, Serialize};

use elegantshop_core::{AddressId, Email, UserId};

/// A logged-in shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Phone number; empty string if never provided.
    pub phone: String,
    /// Saved shipping addresses, in display order.
    pub addresses: Vec<Address>,
}

impl User {
    /// The address checkout should preselect: the one flagged as default,
    /// falling back to the first saved address.
    #[must_use]
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses
            .iter()
            .find(|a| a.is_default)
            .or_else(|| self.addresses.first())
    }
}

/// A saved shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Unique address ID.
    pub id: AddressId,
    /// Recipient name.
    pub name: String,
    /// Recipient phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Postal code.
    pub pincode: String,
    /// Whether this is the preselected address. At most one address per user
    /// should carry this flag.
    pub is_default: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn address(id: &str, is_default: bool) -> Address {
        Address {
            id: AddressId::new(id),
            name: "Priya Sharma".to_string(),
            phone: "+91 98765 43210".to_string(),
            address: "Flat 301, Green Valley Apartments, MG Road".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
            is_default,
        }
    }

    fn user(addresses: Vec<Address>) -> User {
        User {
            id: UserId::new("1"),
            name: "Priya Sharma".to_string(),
            email: Email::parse("priya@example.com").unwrap(),
            phone: "+91 98765 43210".to_string(),
            addresses,
        }
    }

    #[test]
    fn test_default_address_prefers_flag() {
        let u = user(vec![address("1", false), address("2", true)]);
        assert_eq!(u.default_address().unwrap().id, AddressId::new("2"));
    }

    #[test]
    fn test_default_address_falls_back_to_first() {
        let u = user(vec![address("1", false), address("2", false)]);
        assert_eq!(u.default_address().unwrap().id, AddressId::new("1"));
    }

    #[test]
    fn test_default_address_empty() {
        assert!(user(Vec::new()).default_address().is_none());
    }

    #[test]
    fn test_serde_roundtrip() {
        let u = user(vec![address("1", true)]);
        let json = serde_json::to_string(&u).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, u);
        assert!(json.contains("isDefault"));
    }
}
