//! # kirana-core: Pure Business Logic for the Kirana Storefront
//!
//! This crate is the **heart** of Kirana. It contains all business logic
//! as pure functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kirana Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser View Layer (out of scope)            │   │
//! │  │    Product Grid ──► Cart Sidebar ──► Auth Modals ──► Account    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ StoreSnapshot                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kirana-client                                │   │
//! │  │    session + cart controller, token persistence seam            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kirana-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  browse   │  │   │
//! │  │   │   Order   │  │  (paise)  │  │ CartItem  │  │  lookup   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │   token   │  │ validation│                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kirana-backend (simulated service)           │   │
//! │  │          in-memory users / reviews / orders, timed latency      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Review, Order, PublicUser)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart math and the line-item mutation contract
//! - [`catalog`] - Immutable product catalog with browse/lookup
//! - [`token`] - Session token derivation (pure, reversible mapping)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, timers and storage access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use kirana_core::money::Money;
//! use kirana_core::token::SessionToken;
//!
//! // Create money from paise (never from floats!)
//! let price = Money::from_rupees(120); // ₹120.00
//! assert_eq!(price.paise(), 12_000);
//!
//! // Tokens round-trip the user id they were derived from
//! let token = SessionToken::derive(42);
//! assert_eq!(token.user_id(), Some(42));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod token;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kirana_core::Money` instead of
// `use kirana_core::money::Money`

pub use cart::{Cart, CartItem, CartTotals};
pub use catalog::{Catalog, SortOrder};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use token::SessionToken;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct line items allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable order sizes.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line item in the cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Lowest rating a submitted review may carry.
pub const MIN_RATING: u8 = 1;

/// Highest rating a submitted review may carry.
pub const MAX_RATING: u8 = 5;
