//! # Domain Types
//!
//! Core domain types used throughout Kirana.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │    Review       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  id (time-based)│   │  product_id     │       │
//! │  │  name           │   │  items snapshot │   │  rating (1-5)   │       │
//! │  │  price_paise    │   │  total_paise    │   │  text           │       │
//! │  │  seed_reviews   │   │  status         │   │  author         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │   PublicUser    │   │   OrderStatus   │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  id, name,      │   │  Processing     │                              │
//! │  │  email          │   │  (only status   │                              │
//! │  │  (NO password)  │   │   in scope)     │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Public User View
//! The credential (password) lives exclusively inside the backend's store.
//! `PublicUser` is the only user shape that ever crosses a crate boundary,
//! so there is no way to leak a password by construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartItem;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// An immutable catalog entry.
///
/// Loaded once at startup and never mutated; cart items copy the display
/// fields they need, so later catalog changes (if any) can never reach back
/// into an existing cart.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Price in paise (smallest currency unit).
    pub price_paise: i64,

    /// Image asset path, passed through untouched to the view layer.
    pub image_url: String,

    /// Category used for catalog filtering.
    pub category: String,

    /// Long-form description shown on the product page.
    pub description: String,

    /// Aggregate star rating (0.0 - 5.0), display only.
    pub rating: f32,

    /// Reviews shipped with the catalog itself, shown alongside any
    /// reviews submitted through the backend.
    pub seed_reviews: Vec<SeedReview>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_paise(self.price_paise)
    }
}

/// A review baked into the catalog data.
///
/// Unlike a submitted [`Review`], seed reviews carry no rating or timestamp;
/// they exist only to give new products a populated review section.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SeedReview {
    pub author: String,
    pub text: String,
}

// =============================================================================
// Public User View
// =============================================================================

/// The subset of a user record that is safe to return to callers.
///
/// The password never appears here - it stays inside the backend store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PublicUser {
    pub id: u64,
    pub name: String,
    pub email: String,
}

// =============================================================================
// Review
// =============================================================================

/// A product review submitted by an authenticated user.
///
/// Appended to an unbounded per-product collection; never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Review {
    /// The product being reviewed.
    pub product_id: u32,

    /// Star rating, 1-5 inclusive.
    pub rating: u8,

    /// Review body (validated non-empty).
    pub text: String,

    /// Display name of the submitting user, frozen at creation.
    pub author: String,

    /// When the review was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of a placed order.
///
/// Every order starts (and, in this system's scope, stays) in `Processing`;
/// there is no fulfilment pipeline behind the simulated backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OrderStatus {
    Processing,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Processing
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order.
///
/// Uses the snapshot pattern: `items` is a frozen copy of the cart at
/// checkout time, unaffected by later cart mutations. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    /// Unique, time-derived order id (e.g. `order_1726000000000-0042`).
    pub id: String,

    /// Line items frozen at checkout.
    pub items: Vec<CartItem>,

    /// Order total in paise, computed from the cart at checkout.
    pub total_paise: i64,

    /// Current status.
    pub status: OrderStatus,

    /// When the order was placed.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_paise(self.total_paise)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Processing);
    }

    #[test]
    fn test_public_user_has_no_password_field() {
        let user = PublicUser {
            id: 1,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "test@example.com");
    }

    #[test]
    fn test_product_price_as_money() {
        let product = Product {
            id: 1,
            name: "Basmati Rice (1kg)".to_string(),
            price_paise: 12_000,
            image_url: "assets/Rice.jpg".to_string(),
            category: "Groceries & Essentials".to_string(),
            description: "Long-grain Basmati rice.".to_string(),
            rating: 4.2,
            seed_reviews: vec![],
        };
        assert_eq!(product.price(), Money::from_rupees(120));
    }
}
