//! # kirana-backend: Simulated Backend for Kirana
//!
//! An in-memory stand-in for the remote service, owning users, reviews and
//! per-user orders. Every operation suspends on a fixed simulated delay
//! before validating its preconditions and (only then) mutating state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kirana Data Flow                                 │
//! │                                                                         │
//! │  StoreController (kirana-client)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  kirana-backend (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  MockBackend  │    │ Repositories  │    │   Latency    │  │   │
//! │  │   │  (store.rs)   │    │  (auth.rs,    │    │  constants   │  │   │
//! │  │   │               │    │   review.rs,  │    │              │  │   │
//! │  │   │ Arc<Mutex<    │◄───│   order.rs)   │    │ 200ms-1000ms │  │   │
//! │  │   │  StoreData>>  │    │               │    │  per op      │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  In-memory collections (users / reviews / orders) - nothing durable    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering Guarantee
//!
//! Each operation sleeps its full latency *before* taking the store lock.
//! Overlapping calls therefore complete in delay-end order, not issue order,
//! exactly as overlapping timer-based requests would - the race is part of
//! the contract, not an accident to serialize away.
//!
//! ## Module Organization
//!
//! - [`store`] - The shared in-memory store and `MockBackend` facade
//! - [`repository`] - Auth, review and order operations
//! - [`error`] - Service error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kirana_backend::MockBackend;
//!
//! let backend = MockBackend::new();
//!
//! let payload = backend.auth().signup("Alice", "a@x.com", "pw1").await?;
//! let me = backend.auth().check_session(&payload.token).await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{BackendError, BackendResult};
pub use store::MockBackend;

// Repository re-exports for convenience
pub use repository::auth::{AuthPayload, AuthRepository};
pub use repository::order::OrderRepository;
pub use repository::review::ReviewRepository;

// =============================================================================
// Simulated Latency
// =============================================================================
// One fixed delay per operation, standing in for a network round trip.
// The spread (fast session checks, slow order placement) mirrors what the
// real endpoints would cost.

use std::time::Duration;

/// Delay before a signup resolves.
pub const SIGNUP_LATENCY: Duration = Duration::from_millis(500);

/// Delay before a login resolves.
pub const LOGIN_LATENCY: Duration = Duration::from_millis(500);

/// Delay before a session check resolves.
pub const CHECK_SESSION_LATENCY: Duration = Duration::from_millis(200);

/// Delay before a review listing resolves.
pub const LIST_REVIEWS_LATENCY: Duration = Duration::from_millis(400);

/// Delay before a review submission resolves.
pub const ADD_REVIEW_LATENCY: Duration = Duration::from_millis(600);

/// Delay before an order placement resolves.
pub const PLACE_ORDER_LATENCY: Duration = Duration::from_millis(1000);

/// Delay before an order listing resolves.
pub const LIST_ORDERS_LATENCY: Duration = Duration::from_millis(800);
