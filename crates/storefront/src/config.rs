//! Shop configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ELEGANTSHOP_STORAGE_DIR` - Directory for persisted state
//!   (default: `.elegantshop`)
//! - `ELEGANTSHOP_LOGOUT_CLEARS_ORDERS` - Whether logout destroys order
//!   history (default: true)
//! - `ELEGANTSHOP_LOGOUT_CLEARS_NOTIFICATIONS` - Whether logout destroys
//!   notifications (default: false)

use std::path::PathBuf;

use thiserror::Error;

use crate::pricing::PricingConfig;

const STORAGE_DIR_VAR: &str = "ELEGANTSHOP_STORAGE_DIR";
const LOGOUT_CLEARS_ORDERS_VAR: &str = "ELEGANTSHOP_LOGOUT_CLEARS_ORDERS";
const LOGOUT_CLEARS_NOTIFICATIONS_VAR: &str = "ELEGANTSHOP_LOGOUT_CLEARS_NOTIFICATIONS";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held something other than a boolean.
    #[error("{var} must be true/false or 1/0, got {value:?}")]
    InvalidBool {
        /// The offending variable name.
        var: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// What logout destroys beyond user, cart, and wishlist.
///
/// The user, cart, and wishlist are always cleared. Whether order history and
/// notifications outlive a session is a policy decision, so it is
/// configurable rather than hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoutPolicy {
    /// Destroy order history on logout.
    pub clear_orders: bool,
    /// Destroy notifications on logout.
    pub clear_notifications: bool,
}

impl Default for LogoutPolicy {
    /// Orders are cleared, notifications survive the session.
    fn default() -> Self {
        Self {
            clear_orders: true,
            clear_notifications: false,
        }
    }
}

/// Top-level shop configuration.
#[derive(Debug, Clone, Default)]
pub struct ShopConfig {
    /// Directory the file backend persists under.
    pub storage_dir: Option<PathBuf>,
    /// Logout behavior.
    pub logout: LogoutPolicy,
    /// Checkout pricing rules.
    pub pricing: PricingConfig,
}

impl ShopConfig {
    /// Default storage directory when none is configured.
    pub const DEFAULT_STORAGE_DIR: &'static str = ".elegantshop";

    /// Load configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBool` if a policy variable is set to a
    /// non-boolean value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage_dir = std::env::var(STORAGE_DIR_VAR).ok().map(PathBuf::from);

        let mut logout = LogoutPolicy::default();
        if let Some(value) = env_bool(LOGOUT_CLEARS_ORDERS_VAR)? {
            logout.clear_orders = value;
        }
        if let Some(value) = env_bool(LOGOUT_CLEARS_NOTIFICATIONS_VAR)? {
            logout.clear_notifications = value;
        }

        Ok(Self {
            storage_dir,
            logout,
            pricing: PricingConfig::default(),
        })
    }

    /// The storage directory to use, applying the default.
    #[must_use]
    pub fn storage_dir(&self) -> PathBuf {
        self.storage_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_STORAGE_DIR))
    }
}

fn env_bool(var: &'static str) -> Result<Option<bool>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => parse_bool(&value)
            .map(Some)
            .ok_or(ConfigError::InvalidBool { var, value }),
        Err(_) => Ok(None),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
