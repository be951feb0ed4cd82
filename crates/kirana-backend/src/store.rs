//! # Mock Store
//!
//! The in-memory data store and the [`MockBackend`] facade over it.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Who Owns What                                        │
//! │                                                                         │
//! │  MockBackend (this module)                                              │
//! │  ├── users    Vec<User>              ← passwords live ONLY here        │
//! │  ├── reviews  Vec<Review>            ← per-product, insertion order    │
//! │  └── orders   HashMap<user, Vec<_>>  ← per-user, insertion order       │
//! │                                                                         │
//! │  kirana-client                                                          │
//! │  ├── current session (PublicUser or anonymous)                          │
//! │  └── cart                                                               │
//! │                                                                         │
//! │  The full User record never leaves this crate: repositories return     │
//! │  PublicUser views, so a password cannot leak by construction.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! `StoreData` sits behind `Arc<Mutex<_>>`. Operations sleep their simulated
//! latency first and only then take the lock for a short synchronous
//! mutation, so the lock is never held across an await point.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use kirana_core::{Order, PublicUser, Review};

use crate::repository::auth::AuthRepository;
use crate::repository::order::OrderRepository;
use crate::repository::review::ReviewRepository;

// =============================================================================
// User Record
// =============================================================================

/// A full user record, including the credential.
///
/// Crate-private on purpose: only [`User::public_view`] ever crosses the
/// crate boundary.
#[derive(Debug, Clone)]
pub(crate) struct User {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

impl User {
    /// The subset of this record that is safe to return to callers.
    pub(crate) fn public_view(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

// =============================================================================
// Store Data
// =============================================================================

/// The backend's private collections.
#[derive(Debug)]
pub(crate) struct StoreData {
    pub(crate) users: Vec<User>,
    pub(crate) reviews: Vec<Review>,
    pub(crate) orders: HashMap<u64, Vec<Order>>,
    next_user_id: u64,
}

impl StoreData {
    /// Allocates a fresh unique user id.
    ///
    /// A monotonic counter rather than a wall-clock id: ids must round-trip
    /// through session tokens, so collisions are not acceptable even for two
    /// signups in the same millisecond.
    pub(crate) fn allocate_user_id(&mut self) -> u64 {
        let id = self.next_user_id;
        self.next_user_id += 1;
        id
    }

    pub(crate) fn find_user_by_id(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}

impl Default for StoreData {
    /// Seeds the store with the demo fixture account so a fresh storefront
    /// has a working login out of the box.
    fn default() -> Self {
        StoreData {
            users: vec![User {
                id: 1,
                name: "Test User".to_string(),
                email: "test@example.com".to_string(),
                password: "password123".to_string(),
            }],
            reviews: Vec::new(),
            orders: HashMap::new(),
            next_user_id: 2,
        }
    }
}

/// Shared handle to the store, cloned into each repository.
pub(crate) type SharedStore = Arc<Mutex<StoreData>>;

// =============================================================================
// Mock Backend Facade
// =============================================================================

/// The simulated backend service.
///
/// Cheap to clone; all clones share the same underlying store, the way every
/// HTTP client would talk to the same server.
///
/// ## Usage
/// ```rust,ignore
/// let backend = MockBackend::new();
///
/// let payload = backend.auth().login("test@example.com", "password123").await?;
/// let orders = backend.orders().list_for_user(Some(&payload.user)).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    data: SharedStore,
}

impl MockBackend {
    /// Creates a backend with the seeded fixture data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity operations: signup, login, session check.
    pub fn auth(&self) -> AuthRepository {
        AuthRepository::new(Arc::clone(&self.data))
    }

    /// Review operations: list and submit.
    pub fn reviews(&self) -> ReviewRepository {
        ReviewRepository::new(Arc::clone(&self.data))
    }

    /// Order operations: place and list.
    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(Arc::clone(&self.data))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
