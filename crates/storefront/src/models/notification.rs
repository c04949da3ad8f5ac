//! Notification domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use elegantshop_core::{NotificationId, NotificationKind, OrderId};

/// An in-app notification.
///
/// Notifications are created by system events (order placement) or seeded at
/// session start; the only mutation after creation is flipping `read` to
/// true. They are not persisted - each session reseeds its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification ID.
    pub id: NotificationId,
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// What kind of event this announces.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// When the notification was created.
    pub date: DateTime<Utc>,
    /// Whether the shopper has opened it.
    pub read: bool,
}

impl Notification {
    /// Create an unread notification dated now.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id: NotificationId::generate(),
            title: title.into(),
            message: message.into(),
            kind,
            date: Utc::now(),
            read: false,
        }
    }

    /// The confirmation notification emitted when an order is placed.
    #[must_use]
    pub fn order_confirmed(order_id: &OrderId) -> Self {
        Self::new(
            "Order Confirmed",
            format!("Your order {order_id} has been confirmed and will be delivered soon."),
            NotificationKind::Order,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unread() {
        let n = Notification::new("Welcome", "Hello", NotificationKind::Offer);
        assert!(!n.read);
        assert_eq!(n.kind, NotificationKind::Offer);
    }

    #[test]
    fn test_order_confirmed_mentions_order_id() {
        let order_id = OrderId::new("ORD-abc123");
        let n = Notification::order_confirmed(&order_id);
        assert_eq!(n.kind, NotificationKind::Order);
        assert!(n.message.contains("ORD-abc123"));
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let n = Notification::new("Welcome", "Hello", NotificationKind::Promotion);
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["type"], "promotion");
    }
}
