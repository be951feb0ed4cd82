//! # Order Repository
//!
//! Order placement and per-user history.
//!
//! Orders are keyed by user id, so one user's history is invisible to every
//! other user. Within a user's history, orders keep placement order (the
//! client reverses for newest-first display).

use std::time::{SystemTime, UNIX_EPOCH};

use tokio::time::sleep;
use tracing::{debug, info};

use chrono::Utc;
use kirana_core::cart::CartItem;
use kirana_core::{Money, Order, OrderStatus, PublicUser};

use crate::error::{BackendError, BackendResult};
use crate::store::SharedStore;
use crate::{LIST_ORDERS_LATENCY, PLACE_ORDER_LATENCY};

/// Repository for order operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    store: SharedStore,
}

impl OrderRepository {
    pub(crate) fn new(store: SharedStore) -> Self {
        OrderRepository { store }
    }

    /// Places an order from a cart snapshot.
    ///
    /// ## Behavior
    /// - Requires an authenticated user
    /// - Takes ownership of the item snapshot: the order records exactly what
    ///   the cart held at submission, immune to later cart edits
    /// - New orders start in [`OrderStatus::Processing`]
    pub async fn place(
        &self,
        items: Vec<CartItem>,
        total: Money,
        user: Option<&PublicUser>,
    ) -> BackendResult<Order> {
        sleep(PLACE_ORDER_LATENCY).await;

        let user = user.ok_or(BackendError::AuthenticationRequired)?;

        let order = Order {
            id: generate_order_id(),
            items,
            total_paise: total.paise(),
            status: OrderStatus::Processing,
            created_at: Utc::now(),
        };

        let mut data = self.store.lock().expect("store mutex poisoned");
        data.orders.entry(user.id).or_default().push(order.clone());

        info!(
            order_id = %order.id,
            user_id = %user.id,
            total = %total,
            "order placed"
        );
        Ok(order)
    }

    /// Lists the given user's orders, oldest first.
    pub async fn list_for_user(&self, user: Option<&PublicUser>) -> BackendResult<Vec<Order>> {
        sleep(LIST_ORDERS_LATENCY).await;

        let user = user.ok_or(BackendError::AuthenticationRequired)?;

        let data = self.store.lock().expect("store mutex poisoned");
        let orders = data.orders.get(&user.id).cloned().unwrap_or_default();

        debug!(user_id = %user.id, count = orders.len(), "listed orders");
        Ok(orders)
    }
}

/// Generates an order id of the form `order_<millis>-<salt>`.
///
/// The millisecond timestamp alone can collide when two checkouts land in
/// the same tick, so a sub-millisecond salt disambiguates.
fn generate_order_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let salt = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0)
        % 10_000;
    format!("order_{millis}-{salt:04}")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockBackend;

    fn user(id: u64, name: &str) -> PublicUser {
        PublicUser {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn sample_item(product_id: u32, qty: i64) -> CartItem {
        CartItem {
            product_id,
            name: format!("Product {product_id}"),
            unit_price_paise: 12_000,
            image_url: String::new(),
            quantity: qty,
            added_at: Utc::now(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_then_list_round_trip() {
        let backend = MockBackend::new();
        let alice = user(1, "Alice");

        let placed = backend
            .orders()
            .place(vec![sample_item(3, 2)], Money::from_paise(24_000), Some(&alice))
            .await
            .unwrap();
        assert!(placed.id.starts_with("order_"));
        assert_eq!(placed.status, OrderStatus::Processing);
        assert_eq!(placed.total_paise, 24_000);

        let orders = backend.orders().list_for_user(Some(&alice)).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, placed.id);
        assert_eq!(orders[0].items.len(), 1);
        assert_eq!(orders[0].items[0].quantity, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_histories_are_per_user() {
        let backend = MockBackend::new();
        let alice = user(1, "Alice");
        let bob = user(2, "Bob");

        backend
            .orders()
            .place(vec![sample_item(3, 1)], Money::from_paise(12_000), Some(&alice))
            .await
            .unwrap();

        let bobs = backend.orders().list_for_user(Some(&bob)).await.unwrap();
        assert!(bobs.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_orders_keep_placement_order() {
        let backend = MockBackend::new();
        let alice = user(1, "Alice");

        let first = backend
            .orders()
            .place(vec![sample_item(3, 1)], Money::from_paise(12_000), Some(&alice))
            .await
            .unwrap();
        let second = backend
            .orders()
            .place(vec![sample_item(4, 1)], Money::from_paise(9_000), Some(&alice))
            .await
            .unwrap();

        let orders = backend.orders().list_for_user(Some(&alice)).await.unwrap();
        assert_eq!(orders[0].id, first.id);
        assert_eq!(orders[1].id, second.id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_requires_authentication() {
        let backend = MockBackend::new();

        let err = backend
            .orders()
            .place(vec![sample_item(3, 1)], Money::from_paise(12_000), None)
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::AuthenticationRequired));

        let err = backend.orders().list_for_user(None).await.unwrap_err();
        assert!(matches!(err, BackendError::AuthenticationRequired));
    }

    #[tokio::test(start_paused = true)]
    async fn test_order_snapshot_is_immune_to_later_edits() {
        let backend = MockBackend::new();
        let alice = user(1, "Alice");

        let mut items = vec![sample_item(3, 2)];
        backend
            .orders()
            .place(items.clone(), Money::from_paise(24_000), Some(&alice))
            .await
            .unwrap();

        // Mutating the caller's copy must not affect the stored order.
        items[0].quantity = 99;

        let orders = backend.orders().list_for_user(Some(&alice)).await.unwrap();
        assert_eq!(orders[0].items[0].quantity, 2);
    }

    #[test]
    fn test_order_id_shape() {
        let id = generate_order_id();
        let rest = id.strip_prefix("order_").expect("prefix");
        let (millis, salt) = rest.split_once('-').expect("separator");
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(salt.len(), 4);
        assert!(salt.parse::<u32>().is_ok());
    }
}
