//! # Cart State
//!
//! Shared, mutex-protected holder for the shopping cart.
//!
//! The cart math itself lives in `kirana_core::cart`; this wrapper only adds
//! shared ownership and locking so the controller, the snapshot publisher
//! and tests can all see the same cart.

use std::sync::{Arc, Mutex};

use kirana_core::Cart;

/// Shared handle to the cart.
///
/// Cheap to clone; all clones observe the same cart. Access goes through
/// short closures so the lock is released before anything awaits.
#[derive(Debug, Clone)]
pub struct CartState {
    inner: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Starts with an empty cart.
    pub fn new() -> Self {
        CartState {
            inner: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Runs a closure with read access to the cart.
    pub fn with_cart<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        let cart = self.inner.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Runs a closure with mutable access to the cart.
    pub fn with_cart_mut<R>(&self, f: impl FnOnce(&mut Cart) -> R) -> R {
        let mut cart = self.inner.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
