//! The shop state store.
//!
//! `ShopStore` is the single authoritative in-memory representation of cart,
//! wishlist, user, orders, and notifications. It is constructed once at
//! process start and passed by reference to all consumers; every mutation is
//! funneled through a named operation, and each operation persists the
//! collections it touched before returning ("mutate, then persist" - there is
//! no observer pattern and no implicit write ordering to reason about).
//!
//! All operations run to completion synchronously. The only best-effort piece
//! is the persistence write itself, which on failure is logged and skipped;
//! the in-memory state remains authoritative.

use chrono::Utc;
use elegantshop_core::{NotificationId, NotificationKind, OrderId, OrderStatus, Price, ProductId};

use crate::catalog::Catalog;
use crate::config::ShopConfig;
use crate::error::{Result, StoreError};
use crate::models::{Address, CartItem, Notification, Order, Product, User};
use crate::persistence::{FileBackend, Persistence, StorageBackend, keys};
use crate::pricing::{self, OrderCharges};
use crate::services::auth::{AuthProvider, MockAuthProvider};

/// The in-memory source of truth for the whole shop session.
pub struct ShopStore {
    catalog: Catalog,
    cart: Vec<CartItem>,
    wishlist: Vec<Product>,
    user: Option<User>,
    orders: Vec<Order>,
    notifications: Vec<Notification>,
    persistence: Persistence,
    auth: Box<dyn AuthProvider>,
    config: ShopConfig,
}

impl ShopStore {
    /// Open the store with the built-in catalog, the file storage backend,
    /// and the demo auth provider, hydrating any saved state.
    #[must_use]
    pub fn open(config: ShopConfig) -> Self {
        let backend = FileBackend::new(config.storage_dir());
        Self::with_parts(
            Catalog::new(),
            Box::new(backend),
            Box::new(MockAuthProvider),
            config,
        )
    }

    /// Assemble a store from explicit collaborators.
    ///
    /// This is the seam tests and embedders use: any [`StorageBackend`] and
    /// any [`AuthProvider`] can stand in for the defaults. Saved state is
    /// hydrated from the backend; missing or corrupt keys hydrate as empty.
    #[must_use]
    pub fn with_parts(
        catalog: Catalog,
        backend: Box<dyn StorageBackend>,
        auth: Box<dyn AuthProvider>,
        config: ShopConfig,
    ) -> Self {
        let persistence = Persistence::new(backend);

        let cart: Vec<CartItem> = persistence.load(keys::CART).unwrap_or_default();
        let wishlist: Vec<Product> = persistence.load(keys::WISHLIST).unwrap_or_default();
        let user: Option<User> = persistence.load(keys::USER);
        let orders: Vec<Order> = persistence.load(keys::ORDERS).unwrap_or_default();

        tracing::debug!(
            cart_entries = cart.len(),
            wishlist_entries = wishlist.len(),
            orders = orders.len(),
            logged_in = user.is_some(),
            "hydrated shop state"
        );

        Self {
            catalog,
            cart,
            wishlist,
            user,
            orders,
            notifications: seed_notifications(),
            persistence,
            auth,
            config,
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add `quantity` units of a product in the chosen size and color.
    ///
    /// If the cart already holds an entry with the same (product, size,
    /// color) identity, the quantities are merged; otherwise a new entry is
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if `quantity` is zero.
    pub fn add_to_cart(
        &mut self,
        product: Product,
        size: impl Into<String>,
        color: impl Into<String>,
        quantity: u32,
    ) -> Result<()> {
        if quantity == 0 {
            return Err(StoreError::Validation(
                "quantity must be at least 1".to_string(),
            ));
        }

        let size = size.into();
        let color = color.into();

        if let Some(entry) = self
            .cart
            .iter_mut()
            .find(|item| item.matches(&product.id, &size, &color))
        {
            entry.quantity += quantity;
        } else {
            self.cart.push(CartItem {
                product,
                quantity,
                selected_size: size,
                selected_color: color,
            });
        }

        self.persist_cart();
        Ok(())
    }

    /// Remove the entry matching the identity triple. No-op if absent.
    pub fn remove_from_cart(&mut self, product_id: &ProductId, size: &str, color: &str) {
        self.cart.retain(|item| !item.matches(product_id, size, color));
        self.persist_cart();
    }

    /// Set the quantity of the matching entry (replacement, not addition).
    ///
    /// A quantity of zero removes the entry instead of storing a non-positive
    /// value. No-op if no entry matches.
    pub fn update_cart_quantity(
        &mut self,
        product_id: &ProductId,
        size: &str,
        color: &str,
        quantity: u32,
    ) {
        if quantity == 0 {
            self.remove_from_cart(product_id, size, color);
            return;
        }

        if let Some(entry) = self
            .cart
            .iter_mut()
            .find(|item| item.matches(product_id, size, color))
        {
            entry.quantity = quantity;
        }

        self.persist_cart();
    }

    /// Empty the cart unconditionally.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist_cart();
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Add a product to the wishlist. Idempotent on product id.
    pub fn add_to_wishlist(&mut self, product: Product) {
        if self.wishlist.iter().any(|p| p.id == product.id) {
            return;
        }
        self.wishlist.push(product);
        self.persist_wishlist();
    }

    /// Remove a product from the wishlist. No-op if absent.
    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) {
        self.wishlist.retain(|p| p.id != *product_id);
        self.persist_wishlist();
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Log in through the configured auth provider, replacing any current
    /// user.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::services::auth::AuthError`] from the provider (the
    /// demo provider only rejects malformed emails).
    pub fn login(&mut self, email: &str, password: &str) -> Result<&User> {
        let user = self.auth.login(email, password)?;
        let user = self.user.insert(user);
        self.persistence.save(keys::USER, &*user);
        tracing::info!(email = %user.email, "user logged in");
        Ok(&*user)
    }

    /// Create an account through the configured auth provider, replacing any
    /// current user.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::services::auth::AuthError`] from the provider.
    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> Result<&User> {
        let user = self.auth.signup(name, email, password)?;
        let user = self.user.insert(user);
        self.persistence.save(keys::USER, &*user);
        tracing::info!(email = %user.email, "user signed up");
        Ok(&*user)
    }

    /// End the session.
    ///
    /// Always destroys the user, cart, and wishlist; order history and
    /// notifications follow the configured [`crate::config::LogoutPolicy`].
    pub fn logout(&mut self) {
        self.user = None;
        self.cart.clear();
        self.wishlist.clear();
        self.persistence.remove(keys::USER);
        self.persist_cart();
        self.persist_wishlist();

        if self.config.logout.clear_orders {
            self.orders.clear();
            self.persist_orders();
        }
        if self.config.logout.clear_notifications {
            self.notifications.clear();
        }

        tracing::info!("user logged out");
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Place an order for the current cart contents.
    ///
    /// Snapshots the cart, computes the charge breakdown, confirms the order
    /// immediately (there is no payment gateway), prepends it to the history,
    /// clears the cart, and prepends an order-confirmation notification.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the cart is empty.
    pub fn place_order(
        &mut self,
        address: Address,
        payment_method: impl Into<String>,
    ) -> Result<Order> {
        if self.cart.is_empty() {
            return Err(StoreError::Validation(
                "cannot place an order with an empty cart".to_string(),
            ));
        }

        let items = std::mem::take(&mut self.cart);
        let charges = pricing::quote(&items, &self.config.pricing);

        let order = Order {
            id: OrderId::generate(),
            date: Utc::now(),
            total: charges.subtotal,
            charges,
            items,
            status: OrderStatus::Confirmed,
            address,
            payment_method: payment_method.into(),
        };

        self.orders.insert(0, order.clone());
        self.notifications
            .insert(0, Notification::order_confirmed(&order.id));

        self.persist_orders();
        self.persist_cart();

        tracing::info!(
            order_id = %order.id,
            grand_total = %order.charges.grand_total,
            "order placed"
        );

        Ok(order)
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Mark a notification as read. No-op if the id is unknown.
    pub fn mark_notification_as_read(&mut self, notification_id: &NotificationId) {
        if let Some(notification) = self
            .notifications
            .iter_mut()
            .find(|n| n.id == *notification_id)
        {
            notification.read = true;
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All catalog products.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Look up a catalog product by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is not in the catalog.
    pub fn find_product(&self, id: &ProductId) -> Result<&Product> {
        self.catalog
            .product(id)
            .ok_or_else(|| StoreError::NotFound(format!("product {id}")))
    }

    /// Current cart contents.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// Current wishlist.
    #[must_use]
    pub fn wishlist(&self) -> &[Product] {
        &self.wishlist
    }

    /// The logged-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Order history, newest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// All notifications, newest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Count of unread notifications. Recomputed on every call, never stored.
    #[must_use]
    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Total units across all cart entries.
    #[must_use]
    pub fn cart_item_count(&self) -> u32 {
        self.cart.iter().map(|item| item.quantity).sum()
    }

    /// Sum of cart line totals.
    #[must_use]
    pub fn cart_subtotal(&self) -> Price {
        let amount = self.cart.iter().map(|item| item.line_total().amount).sum();
        Price::new(amount, self.config.pricing.currency)
    }

    /// The charge breakdown checkout would apply to the current cart.
    #[must_use]
    pub fn checkout_quote(&self) -> OrderCharges {
        pricing::quote(&self.cart, &self.config.pricing)
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ShopConfig {
        &self.config
    }

    // =========================================================================
    // Persistence sequencing
    // =========================================================================

    fn persist_cart(&mut self) {
        self.persistence.save(keys::CART, &self.cart);
    }

    fn persist_wishlist(&mut self) {
        self.persistence.save(keys::WISHLIST, &self.wishlist);
    }

    fn persist_orders(&mut self) {
        self.persistence.save(keys::ORDERS, &self.orders);
    }
}

impl std::fmt::Debug for ShopStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopStore")
            .field("cart_entries", &self.cart.len())
            .field("wishlist_entries", &self.wishlist.len())
            .field("logged_in", &self.user.is_some())
            .field("orders", &self.orders.len())
            .field("notifications", &self.notifications.len())
            .finish_non_exhaustive()
    }
}

/// The notifications every session starts with.
fn seed_notifications() -> Vec<Notification> {
    let welcome = Notification::new(
        "Welcome to ElegantShop!",
        "Get 20% off on your first order. Use code: FIRST20",
        NotificationKind::Offer,
    );

    let mut collection = Notification::new(
        "New Collection Alert",
        "Check out our latest summer collection",
        NotificationKind::Promotion,
    );
    collection.date = collection.date - chrono::Duration::days(1);

    vec![welcome, collection]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use elegantshop_core::AddressId;
    use rust_decimal::Decimal;

    use super::*;
    use crate::config::LogoutPolicy;
    use crate::persistence::{MemoryBackend, StorageError};

    fn store() -> ShopStore {
        store_with_config(ShopConfig::default())
    }

    fn store_with_config(config: ShopConfig) -> ShopStore {
        ShopStore::with_parts(
            Catalog::new(),
            Box::new(MemoryBackend::new()),
            Box::new(MockAuthProvider),
            config,
        )
    }

    fn product(store: &ShopStore, id: &str) -> Product {
        store.find_product(&ProductId::new(id)).unwrap().clone()
    }

    fn priced_product(id: &str, price: i64) -> Product {
        let mut p = Catalog::new().products().first().unwrap().clone();
        p.id = ProductId::new(id);
        p.price = Price::rupees(price);
        p
    }

    fn address() -> Address {
        Address {
            id: AddressId::new("1"),
            name: "Priya Sharma".to_string(),
            phone: "+91 98765 43210".to_string(),
            address: "Flat 301, Green Valley Apartments, MG Road".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
            is_default: true,
        }
    }

    #[test]
    fn test_add_to_cart_merges_same_identity() {
        let mut shop = store();
        let p = product(&shop, "p-001");

        shop.add_to_cart(p.clone(), "M", "Red", 2).unwrap();
        shop.add_to_cart(p, "M", "Red", 3).unwrap();

        assert_eq!(shop.cart().len(), 1);
        assert_eq!(shop.cart().first().unwrap().quantity, 5);
    }

    #[test]
    fn test_add_to_cart_different_selection_is_new_entry() {
        let mut shop = store();
        let p = product(&shop, "p-001");

        shop.add_to_cart(p.clone(), "M", "Red", 1).unwrap();
        shop.add_to_cart(p.clone(), "L", "Red", 1).unwrap();
        shop.add_to_cart(p, "M", "Navy", 1).unwrap();

        assert_eq!(shop.cart().len(), 3);
        assert_eq!(shop.cart_item_count(), 3);
    }

    #[test]
    fn test_add_to_cart_rejects_zero_quantity() {
        let mut shop = store();
        let p = product(&shop, "p-001");

        let err = shop.add_to_cart(p, "M", "Red", 0).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_update_quantity_replaces_value() {
        let mut shop = store();
        let p = product(&shop, "p-001");
        let id = p.id.clone();

        shop.add_to_cart(p, "M", "Red", 2).unwrap();
        shop.update_cart_quantity(&id, "M", "Red", 7);

        assert_eq!(shop.cart().first().unwrap().quantity, 7);
    }

    #[test]
    fn test_update_quantity_zero_removes_entry() {
        let mut shop = store();
        let p = product(&shop, "p-001");
        let id = p.id.clone();

        shop.add_to_cart(p, "M", "Red", 2).unwrap();
        shop.update_cart_quantity(&id, "M", "Red", 0);

        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_update_and_remove_on_absent_entry_are_noops() {
        let mut shop = store();
        let p = product(&shop, "p-001");
        shop.add_to_cart(p, "M", "Red", 2).unwrap();

        shop.update_cart_quantity(&ProductId::new("p-999"), "M", "Red", 5);
        shop.remove_from_cart(&ProductId::new("p-999"), "M", "Red");

        assert_eq!(shop.cart().len(), 1);
        assert_eq!(shop.cart().first().unwrap().quantity, 2);
    }

    #[test]
    fn test_clear_cart() {
        let mut shop = store();
        let p = product(&shop, "p-001");
        shop.add_to_cart(p, "M", "Red", 2).unwrap();

        shop.clear_cart();
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_wishlist_is_idempotent_on_product_id() {
        let mut shop = store();
        let p = product(&shop, "p-002");

        shop.add_to_wishlist(p.clone());
        shop.add_to_wishlist(p);

        assert_eq!(shop.wishlist().len(), 1);
    }

    #[test]
    fn test_remove_from_wishlist() {
        let mut shop = store();
        let p = product(&shop, "p-002");
        let id = p.id.clone();

        shop.add_to_wishlist(p);
        shop.remove_from_wishlist(&id);
        shop.remove_from_wishlist(&id); // second call is a no-op

        assert!(shop.wishlist().is_empty());
    }

    #[test]
    fn test_login_carries_provided_email() {
        let mut shop = store();
        let user = shop.login("shopper@example.com", "hunter2").unwrap();
        assert_eq!(user.email.as_str(), "shopper@example.com");
        assert!(shop.user().is_some());
    }

    #[test]
    fn test_signup_then_user_is_present() {
        let mut shop = store();
        shop.signup("Asha Rao", "asha@example.com", "pw").unwrap();
        assert_eq!(shop.user().unwrap().name, "Asha Rao");
    }

    #[test]
    fn test_logout_default_policy() {
        let mut shop = store();
        let p = product(&shop, "p-001");
        shop.login("shopper@example.com", "pw").unwrap();
        shop.add_to_cart(p.clone(), "M", "Red", 1).unwrap();
        shop.add_to_wishlist(p);
        shop.place_order(address(), "upi").unwrap();
        let notifications_before = shop.notifications().len();

        shop.logout();

        assert!(shop.user().is_none());
        assert!(shop.cart().is_empty());
        assert!(shop.wishlist().is_empty());
        // Default policy: orders cleared, notifications kept
        assert!(shop.orders().is_empty());
        assert_eq!(shop.notifications().len(), notifications_before);
    }

    #[test]
    fn test_logout_policy_keep_orders_clear_notifications() {
        let config = ShopConfig {
            logout: LogoutPolicy {
                clear_orders: false,
                clear_notifications: true,
            },
            ..ShopConfig::default()
        };
        let mut shop = store_with_config(config);
        let p = product(&shop, "p-001");
        shop.add_to_cart(p, "M", "Red", 1).unwrap();
        shop.place_order(address(), "card").unwrap();

        shop.logout();

        assert_eq!(shop.orders().len(), 1);
        assert!(shop.notifications().is_empty());
        assert_eq!(shop.unread_notification_count(), 0);
    }

    #[test]
    fn test_place_order_on_empty_cart_fails() {
        let mut shop = store();
        let err = shop.place_order(address(), "upi").unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(shop.orders().is_empty());
    }

    #[test]
    fn test_place_order_totals_and_side_effects() {
        let mut shop = store();
        shop.add_to_cart(priced_product("px-1", 100), "M", "Red", 2)
            .unwrap();
        shop.add_to_cart(priced_product("px-2", 50), "M", "Red", 1)
            .unwrap();
        let notifications_before = shop.notifications().len();

        let order = shop.place_order(address(), "upi").unwrap();

        // total is the item subtotal; grand_total adds GST and delivery
        assert_eq!(order.total.amount, Decimal::from(250));
        assert_eq!(order.charges.gst.amount, Decimal::from(45));
        assert_eq!(order.charges.delivery.amount, Decimal::from(99));
        assert_eq!(order.charges.grand_total.amount, Decimal::from(394));
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.items.len(), 2);
        assert!(order.id.as_str().starts_with(OrderId::PREFIX));

        assert!(shop.cart().is_empty());
        assert_eq!(shop.orders().len(), 1);
        assert_eq!(shop.notifications().len(), notifications_before + 1);
        let latest = shop.notifications().first().unwrap();
        assert_eq!(latest.kind, NotificationKind::Order);
        assert!(latest.message.contains(order.id.as_str()));
    }

    #[test]
    fn test_order_history_is_newest_first() {
        let mut shop = store();
        let p = product(&shop, "p-003");

        shop.add_to_cart(p.clone(), "M", "Blue", 1).unwrap();
        let first = shop.place_order(address(), "upi").unwrap();
        shop.add_to_cart(p, "L", "White", 1).unwrap();
        let second = shop.place_order(address(), "cod").unwrap();

        let ids: Vec<_> = shop.orders().iter().map(|o| o.id.clone()).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_order_snapshot_is_independent_of_later_cart_mutations() {
        let mut shop = store();
        let p = product(&shop, "p-001");
        shop.add_to_cart(p.clone(), "M", "Red", 2).unwrap();

        let order = shop.place_order(address(), "upi").unwrap();
        shop.add_to_cart(p, "M", "Red", 9).unwrap();

        assert_eq!(order.items.first().unwrap().quantity, 2);
        assert_eq!(
            shop.orders().first().unwrap().items.first().unwrap().quantity,
            2
        );
    }

    #[test]
    fn test_seeded_notifications_and_mark_read() {
        let mut shop = store();
        assert_eq!(shop.unread_notification_count(), 2);

        let id = shop.notifications().first().unwrap().id.clone();
        shop.mark_notification_as_read(&id);
        assert_eq!(shop.unread_notification_count(), 1);

        // Marking again or marking an unknown id changes nothing
        shop.mark_notification_as_read(&id);
        shop.mark_notification_as_read(&NotificationId::new("nope"));
        assert_eq!(shop.unread_notification_count(), 1);
    }

    #[test]
    fn test_cart_subtotal_and_checkout_quote_agree() {
        let mut shop = store();
        shop.add_to_cart(priced_product("px-1", 450), "S", "Teal", 2)
            .unwrap();

        let quote = shop.checkout_quote();
        assert_eq!(shop.cart_subtotal().amount, quote.subtotal.amount);
        assert_eq!(quote.subtotal.amount, Decimal::from(900));
    }

    #[test]
    fn test_find_product_not_found() {
        let shop = store();
        let err = shop.find_product(&ProductId::new("p-404")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    /// Backend whose every operation fails, standing in for storage that has
    /// gone away entirely (quota exceeded, directory deleted).
    struct OfflineBackend;

    impl StorageBackend for OfflineBackend {
        fn load(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
            Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::other("storage offline"),
            })
        }

        fn save(&mut self, key: &str, _value: &str) -> std::result::Result<(), StorageError> {
            Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::other("storage offline"),
            })
        }

        fn remove(&mut self, key: &str) -> std::result::Result<(), StorageError> {
            Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::other("storage offline"),
            })
        }
    }

    #[test]
    fn test_mutations_survive_storage_write_failures() {
        let catalog = Catalog::with_products(vec![priced_product("px-1", 100)]);
        let mut shop = ShopStore::with_parts(
            catalog,
            Box::new(OfflineBackend),
            Box::new(MockAuthProvider),
            ShopConfig::default(),
        );

        // Hydration degraded to empty state instead of failing
        assert!(shop.cart().is_empty());
        assert!(shop.user().is_none());

        // Every mutation succeeds; the in-memory state stays authoritative
        let p = shop.find_product(&ProductId::new("px-1")).unwrap().clone();
        shop.add_to_cart(p, "M", "Red", 2).unwrap();
        assert_eq!(shop.cart_item_count(), 2);

        shop.login("shopper@example.com", "pw").unwrap();
        assert!(shop.user().is_some());

        let order = shop.place_order(address(), "upi").unwrap();
        assert!(shop.cart().is_empty());
        assert_eq!(shop.orders().first().unwrap().id, order.id);

        shop.logout();
        assert!(shop.user().is_none());
        assert!(shop.orders().is_empty());
    }
}
