//! # kirana-client: Client State Controller for Kirana
//!
//! The storefront's single source of truth for "who is logged in" and
//! "what is in the cart". A presentation layer drives it with plain method
//! calls and redraws from the snapshots it publishes.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kirana Client Layer                              │
//! │                                                                         │
//! │  Browser view layer (out of scope)                                      │
//! │       │  actions                        ▲  StoreSnapshot (watch)        │
//! │       ▼                                 │                               │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  kirana-client (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐   ┌─────────────┐   ┌──────────────────┐   │   │
//! │  │   │StoreController│  │ state::*    │   │   token_store    │   │   │
//! │  │   │(controller.rs)│  │ SessionState│   │ TokenStore seam  │   │   │
//! │  │   │               │──│ CartState   │   │ "authToken" key  │   │   │
//! │  │   └──────┬────────┘  └─────────────┘   └──────────────────┘   │   │
//! │  └──────────┼──────────────────────────────────────────────────────┘   │
//! │             ▼                                                           │
//! │  kirana-backend (simulated service, timed latency)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`controller`] - `StoreController`, snapshots, checkout outcomes
//! - [`state`] - Session and cart state holders
//! - [`token_store`] - Token persistence seam (`TokenStore` trait)
//! - [`error`] - View-facing `ApiError`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use kirana_backend::MockBackend;
//! use kirana_client::{MemoryTokenStore, StoreController};
//!
//! kirana_client::init_tracing();
//!
//! let controller = StoreController::new(catalog, MockBackend::new(), Arc::new(MemoryTokenStore::new()));
//! controller.restore_session().await;
//!
//! controller.add_to_cart(1)?;
//! let snapshot = controller.snapshot();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod controller;
pub mod error;
pub mod state;
pub mod token_store;

// =============================================================================
// Re-exports
// =============================================================================

pub use controller::{CheckoutOutcome, ProductReviews, StoreController, StoreSnapshot};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use state::{CartState, Session, SessionState};
pub use token_store::{MemoryTokenStore, TokenStore, AUTH_TOKEN_KEY};

// =============================================================================
// Tracing Setup
// =============================================================================

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Honors `RUST_LOG` when set, otherwise defaults to info-level output with
/// debug detail for the kirana crates. Safe to call more than once; later
/// calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kirana_core=debug,kirana_backend=debug,kirana_client=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
