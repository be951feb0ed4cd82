//! # Store Controller
//!
//! The storefront's single source of truth, tying session, cart, catalog
//! and backend together.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Controller Data Flow                                 │
//! │                                                                         │
//! │  user action                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreController ──────────────► MockBackend (simulated latency)        │
//! │       │                               │                                 │
//! │       │  on success: mutate           │                                 │
//! │       │  session / cart               │  on failure: state is left      │
//! │       ▼                               ▼  exactly as it was              │
//! │  publish() ──► watch channel ──► StoreSnapshot                          │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │                              view layer redraws                         │
//! │                                                                         │
//! │  Every mutation ends in publish(), so a subscriber can redraw from     │
//! │  the latest snapshot alone and never needs to diff events.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Deliberate Race
//!
//! Checkout is not guarded against double-submission: two overlapping
//! checkout calls each snapshot the cart and each place an order, exactly
//! as two rapid clicks would against a real remote service. Only the auth
//! forms are guarded (the `auth_busy` flag), matching the storefront's
//! disabled submit button. See `test_double_checkout_places_two_orders`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info};
use ts_rs::TS;

use kirana_backend::MockBackend;
use kirana_core::cart::{CartItem, CartTotals};
use kirana_core::{Catalog, Order, Product, PublicUser, Review, SeedReview, SessionToken, SortOrder};

use crate::error::{ApiError, ApiResult};
use crate::state::{CartState, Session, SessionState};
use crate::token_store::TokenStore;

// =============================================================================
// View-Facing Payloads
// =============================================================================

/// Read-only snapshot of everything the view layer needs to redraw.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StoreSnapshot {
    /// Who is logged in, if anyone.
    pub session: Session,

    /// Cart line items in insertion order.
    pub items: Vec<CartItem>,

    /// Derived cart totals, never stale.
    pub totals: CartTotals,

    /// Whether an auth call is in flight (the view disables the submit
    /// button while this is set).
    pub auth_busy: bool,
}

/// What a checkout attempt produced.
///
/// Login-required is a reported outcome, not an error: the view reacts by
/// opening the login form, not by showing a failure banner.
#[derive(Debug, Clone)]
pub enum CheckoutOutcome {
    /// The order was placed and the cart cleared.
    Placed(Order),
    /// Nobody is logged in; the backend was not contacted.
    LoginRequired,
}

/// Both halves of a product's review section.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductReviews {
    /// Reviews shipped with the catalog entry itself.
    pub seed: Vec<SeedReview>,

    /// Reviews submitted through the backend, in submission order.
    pub submitted: Vec<Review>,
}

// =============================================================================
// Store Controller
// =============================================================================

/// Owns session and cart state, mediates every backend call, and publishes
/// a fresh [`StoreSnapshot`] after each mutation.
#[derive(Debug)]
pub struct StoreController {
    catalog: Catalog,
    backend: MockBackend,
    token_store: Arc<dyn TokenStore>,
    session: SessionState,
    cart: CartState,
    auth_busy: AtomicBool,
    snapshot_tx: watch::Sender<StoreSnapshot>,
}

impl StoreController {
    /// Creates a controller with an Anonymous session and an empty cart.
    ///
    /// Call [`StoreController::restore_session`] afterwards to pick up a
    /// persisted token from a previous run.
    pub fn new(catalog: Catalog, backend: MockBackend, token_store: Arc<dyn TokenStore>) -> Self {
        let session = SessionState::new();
        let cart = CartState::new();
        let initial = Self::build_snapshot(&session, &cart, false);
        let (snapshot_tx, _) = watch::channel(initial);

        StoreController {
            catalog,
            backend,
            token_store,
            session,
            cart,
            auth_busy: AtomicBool::new(false),
            snapshot_tx,
        }
    }

    // ===== Snapshots =====

    /// The current snapshot, computed fresh.
    pub fn snapshot(&self) -> StoreSnapshot {
        Self::build_snapshot(
            &self.session,
            &self.cart,
            self.auth_busy.load(Ordering::SeqCst),
        )
    }

    /// Subscribes to snapshot updates.
    ///
    /// The receiver wakes after every published mutation; it always observes
    /// the latest snapshot (intermediate ones may be skipped under load,
    /// which is fine for a redraw-from-latest consumer).
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.snapshot_tx.subscribe()
    }

    fn build_snapshot(session: &SessionState, cart: &CartState, auth_busy: bool) -> StoreSnapshot {
        let (items, totals) = cart.with_cart(|c| (c.items().to_vec(), CartTotals::from(c)));
        StoreSnapshot {
            session: session.current(),
            items,
            totals,
            auth_busy,
        }
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(self.snapshot());
    }

    // ===== Session Lifecycle =====

    /// Attempts to restore a session from the persisted token.
    ///
    /// ## Behavior
    /// - No token persisted: stays Anonymous
    /// - Token resolves to a user: transitions to Authenticated
    /// - Token is stale (malformed or unknown user): discarded from the
    ///   store, stays Anonymous - never surfaced as an error
    pub async fn restore_session(&self) {
        let Some(raw) = self.token_store.load() else {
            debug!("no persisted token");
            self.publish();
            return;
        };

        let token = SessionToken::from_raw(raw);
        match self.backend.auth().check_session(&token).await {
            Some(user) => {
                info!(user_id = %user.id, "session restored");
                self.session.set(Session::Authenticated { user });
            }
            None => {
                debug!("stale token discarded");
                self.token_store.clear();
            }
        }
        self.publish();
    }

    /// Registers a new account and logs it in.
    ///
    /// Sets `auth_busy` for the duration of the call; the view keeps the
    /// signup form disabled while it is set. On success the token is
    /// persisted and the session flips to Authenticated.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> ApiResult<PublicUser> {
        self.begin_auth();
        let result = self.backend.auth().signup(name, email, password).await;
        let outcome = match result {
            Ok(payload) => {
                self.token_store.save(payload.token.as_str());
                self.session.set(Session::Authenticated {
                    user: payload.user.clone(),
                });
                Ok(payload.user)
            }
            Err(err) => {
                debug!(error = %err, "signup failed");
                Err(err.into())
            }
        };
        self.end_auth();
        outcome
    }

    /// Logs into an existing account.
    ///
    /// Same busy-flag and persistence behavior as [`StoreController::signup`].
    /// On failure, session and cart are exactly as before the call.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<PublicUser> {
        self.begin_auth();
        let result = self.backend.auth().login(email, password).await;
        let outcome = match result {
            Ok(payload) => {
                self.token_store.save(payload.token.as_str());
                self.session.set(Session::Authenticated {
                    user: payload.user.clone(),
                });
                Ok(payload.user)
            }
            Err(err) => {
                debug!(error = %err, "login failed");
                Err(err.into())
            }
        };
        self.end_auth();
        outcome
    }

    /// Logs out unconditionally.
    ///
    /// Local-only: the backend is not consulted, the persisted token is
    /// discarded, and the cart is deliberately kept (an anonymous shopper
    /// can still browse with a full cart).
    pub fn logout(&self) {
        self.token_store.clear();
        self.session.set(Session::Anonymous);
        info!("logged out");
        self.publish();
    }

    fn begin_auth(&self) {
        self.auth_busy.store(true, Ordering::SeqCst);
        self.publish();
    }

    fn end_auth(&self) {
        self.auth_busy.store(false, Ordering::SeqCst);
        self.publish();
    }

    // ===== Cart Mutations =====
    // Synchronous: the cart is purely local state, so mutations never
    // suspend. Each one ends in publish().

    /// Adds one unit of a catalog product to the cart.
    pub fn add_to_cart(&self, product_id: u32) -> ApiResult<()> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| ApiError::not_found(product_id))?;

        self.cart.with_cart_mut(|cart| cart.add_product(product))?;
        debug!(product_id = %product_id, "added to cart");
        self.publish();
        Ok(())
    }

    /// Adjusts a line item's quantity by a signed delta.
    ///
    /// A resulting quantity ≤ 0 removes the line; a missing id is a no-op.
    pub fn change_quantity(&self, product_id: u32, delta: i64) -> ApiResult<()> {
        self.cart
            .with_cart_mut(|cart| cart.change_quantity(product_id, delta))?;
        debug!(product_id = %product_id, delta = %delta, "quantity changed");
        self.publish();
        Ok(())
    }

    /// Removes a line item. No-op if the product is not in the cart.
    pub fn remove_from_cart(&self, product_id: u32) {
        self.cart.with_cart_mut(|cart| cart.remove(product_id));
        debug!(product_id = %product_id, "removed from cart");
        self.publish();
    }

    // ===== Checkout =====

    /// Attempts to place an order from the current cart.
    ///
    /// ## Behavior
    /// - Anonymous: returns [`CheckoutOutcome::LoginRequired`] without
    ///   contacting the backend; the cart is untouched
    /// - Empty cart: rejected before contacting the backend
    /// - Otherwise: places an order from a snapshot of the cart; on success
    ///   the cart is cleared, on failure it is left exactly as it was
    pub async fn checkout(&self) -> ApiResult<CheckoutOutcome> {
        let Some(user) = self.session.user() else {
            debug!("checkout requires login");
            return Ok(CheckoutOutcome::LoginRequired);
        };

        let (items, total) = self
            .cart
            .with_cart(|cart| (cart.items().to_vec(), cart.total_price()));
        if items.is_empty() {
            return Err(ApiError::cart("Cannot check out an empty cart."));
        }

        let order = self.backend.orders().place(items, total, Some(&user)).await?;

        self.cart.with_cart_mut(|cart| cart.clear());
        info!(order_id = %order.id, "checkout complete");
        self.publish();
        Ok(CheckoutOutcome::Placed(order))
    }

    // ===== Reviews =====

    /// Both halves of a product's review section: catalog seed reviews plus
    /// everything submitted through the backend.
    pub async fn product_reviews(&self, product_id: u32) -> ApiResult<ProductReviews> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| ApiError::not_found(product_id))?;

        let submitted = self.backend.reviews().list_for_product(product_id).await;
        Ok(ProductReviews {
            seed: product.seed_reviews.clone(),
            submitted,
        })
    }

    /// Submits a review as the logged-in user.
    pub async fn submit_review(&self, product_id: u32, rating: u8, text: &str) -> ApiResult<Review> {
        if self.catalog.get(product_id).is_none() {
            return Err(ApiError::not_found(product_id));
        }

        let user = self.session.user();
        let review = self
            .backend
            .reviews()
            .add(product_id, rating, text, user.as_ref())
            .await?;
        Ok(review)
    }

    // ===== Orders =====

    /// The logged-in user's order history, oldest first.
    pub async fn my_orders(&self) -> ApiResult<Vec<Order>> {
        let user = self.session.user();
        let orders = self.backend.orders().list_for_user(user.as_ref()).await?;
        Ok(orders)
    }

    // ===== Catalog =====

    /// Filters and sorts the catalog for display.
    pub fn browse(&self, query: &str, category: Option<&str>, sort: SortOrder) -> Vec<Product> {
        self.catalog
            .browse(query, category, sort)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Distinct category names for the filter dropdown.
    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::token_store::MemoryTokenStore;
    use kirana_core::Money;

    fn fixture_catalog() -> Catalog {
        let product = |id: u32, name: &str, rupees: i64, category: &str| Product {
            id,
            name: name.to_string(),
            price_paise: Money::from_rupees(rupees).paise(),
            image_url: format!("assets/{id}.jpg"),
            category: category.to_string(),
            description: String::new(),
            rating: 4.0,
            seed_reviews: vec![],
        };

        let mut rice = product(1, "Basmati Rice (1kg)", 120, "Groceries & Essentials");
        rice.seed_reviews = vec![SeedReview {
            author: "Priya".to_string(),
            text: "Fragrant and fluffy.".to_string(),
        }];

        Catalog::new(vec![
            rice,
            product(2, "Whole Wheat Flour (5kg)", 250, "Groceries & Essentials"),
            product(3, "Fresh Paneer (200g)", 80, "Dairy & Bakery"),
        ])
    }

    fn controller() -> StoreController {
        StoreController::new(
            fixture_catalog(),
            MockBackend::new(),
            Arc::new(MemoryTokenStore::new()),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_alice_full_scenario() {
        let c = controller();

        let user = c.signup("Alice", "a@x.com", "pw1").await.unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "a@x.com");
        assert!(c.snapshot().session.is_authenticated());

        c.add_to_cart(1).unwrap();
        c.add_to_cart(1).unwrap();
        let snap = c.snapshot();
        assert_eq!(snap.items.len(), 1);
        assert_eq!(snap.items[0].product_id, 1);
        assert_eq!(snap.items[0].quantity, 2);

        let outcome = c.checkout().await.unwrap();
        let CheckoutOutcome::Placed(order) = outcome else {
            panic!("expected a placed order");
        };
        assert_eq!(order.total(), Money::from_rupees(240));
        assert!(c.snapshot().items.is_empty());
        assert!(!c.snapshot().totals.can_checkout);

        let orders = c.my_orders().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, order.id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_failure_leaves_state_untouched() {
        let c = controller();
        c.add_to_cart(1).unwrap();
        let before = c.snapshot();

        let err = c.login("test@example.com", "wrong").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert_eq!(err.message, "Invalid credentials.");

        let after = c.snapshot();
        assert_eq!(after.session, Session::Anonymous);
        assert_eq!(after.totals, before.totals);
        assert!(!after.auth_busy);
    }

    #[tokio::test(start_paused = true)]
    async fn test_checkout_anonymous_reports_login_required() {
        let c = controller();
        c.add_to_cart(2).unwrap();

        let outcome = c.checkout().await.unwrap();
        assert!(matches!(outcome, CheckoutOutcome::LoginRequired));

        // The cart is untouched and no order exists once the user logs in.
        assert_eq!(c.snapshot().totals.total_quantity, 1);
        c.login("test@example.com", "password123").await.unwrap();
        assert!(c.my_orders().await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_checkout_empty_cart_rejected() {
        let c = controller();
        c.login("test@example.com", "password123").await.unwrap();

        let err = c.checkout().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Cart);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_checkout_places_two_orders() {
        let c = controller();
        c.login("test@example.com", "password123").await.unwrap();
        c.add_to_cart(1).unwrap();

        // Two overlapping submissions each snapshot the cart before either
        // resolves, so both orders go through. Nothing serializes this.
        let (first, second) = tokio::join!(c.checkout(), c.checkout());
        assert!(matches!(first.unwrap(), CheckoutOutcome::Placed(_)));
        assert!(matches!(second.unwrap(), CheckoutOutcome::Placed(_)));

        assert_eq!(c.my_orders().await.unwrap().len(), 2);
        assert!(c.snapshot().items.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_session_round_trip() {
        let backend = MockBackend::new();
        let tokens: Arc<MemoryTokenStore> = Arc::new(MemoryTokenStore::new());

        // First run: sign up, which persists the token.
        let first = StoreController::new(fixture_catalog(), backend.clone(), tokens.clone());
        first.signup("Alice", "a@x.com", "pw1").await.unwrap();
        assert!(tokens.load().is_some());

        // Second run against the same backend and token store.
        let second = StoreController::new(fixture_catalog(), backend, tokens);
        assert_eq!(second.snapshot().session, Session::Anonymous);
        second.restore_session().await;

        let session = second.snapshot().session;
        assert_eq!(session.user().unwrap().email, "a@x.com");
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_with_stale_token_clears_it() {
        let tokens: Arc<MemoryTokenStore> = Arc::new(MemoryTokenStore::with_token("mock_token_999"));
        let c = StoreController::new(fixture_catalog(), MockBackend::new(), tokens.clone());

        c.restore_session().await;

        assert_eq!(c.snapshot().session, Session::Anonymous);
        assert_eq!(tokens.load(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_clears_token_but_keeps_cart() {
        let tokens: Arc<MemoryTokenStore> = Arc::new(MemoryTokenStore::new());
        let c = StoreController::new(fixture_catalog(), MockBackend::new(), tokens.clone());

        c.login("test@example.com", "password123").await.unwrap();
        c.add_to_cart(3).unwrap();
        c.logout();

        assert_eq!(c.snapshot().session, Session::Anonymous);
        assert_eq!(tokens.load(), None);
        assert_eq!(c.snapshot().totals.total_quantity, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auth_busy_visible_while_login_in_flight() {
        let c = controller();
        let mut rx = c.subscribe();

        let (login, busy_seen) = tokio::join!(c.login("test@example.com", "password123"), async {
            rx.changed().await.unwrap();
            rx.borrow_and_update().auth_busy
        });
        login.unwrap();

        assert!(busy_seen);
        assert!(!c.snapshot().auth_busy);
        assert!(c.snapshot().session.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_cart_mutation_publishes() {
        let c = controller();
        let mut rx = c.subscribe();

        c.add_to_cart(1).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().totals.total_quantity, 1);

        c.change_quantity(1, 2).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().totals.total_quantity, 3);

        c.remove_from_cart(1);
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().items.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_unknown_product_is_not_found() {
        let c = controller();

        let err = c.add_to_cart(99).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(c.snapshot().items.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reviews_merge_seed_and_submitted() {
        let c = controller();

        let err = c.submit_review(1, 5, "Great rice!").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthenticationRequired);

        c.login("test@example.com", "password123").await.unwrap();
        let review = c.submit_review(1, 5, "Great rice!").await.unwrap();
        assert_eq!(review.author, "Test User");

        let reviews = c.product_reviews(1).await.unwrap();
        assert_eq!(reviews.seed.len(), 1);
        assert_eq!(reviews.seed[0].author, "Priya");
        assert_eq!(reviews.submitted.len(), 1);
        assert_eq!(reviews.submitted[0].text, "Great rice!");
    }

    #[tokio::test(start_paused = true)]
    async fn test_catalog_passthroughs() {
        let c = controller();

        assert_eq!(
            c.categories(),
            vec!["Groceries & Essentials", "Dairy & Bakery"]
        );

        let cheapest_first: Vec<u32> = c
            .browse("", None, SortOrder::PriceAsc)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(cheapest_first, vec![3, 1, 2]);

        let dairy = c.browse("", Some("Dairy & Bakery"), SortOrder::Featured);
        assert_eq!(dairy.len(), 1);
        assert_eq!(dairy[0].id, 3);
    }
}
