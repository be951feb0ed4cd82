//! # Cart
//!
//! The shopping cart and its line-item mutation contract.
//!
//! ## Mutation Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Mutations                                       │
//! │                                                                         │
//! │  User Action              Operation                 State Change        │
//! │  ───────────              ─────────                 ────────────        │
//! │                                                                         │
//! │  "Add to Cart" ─────────► add_product() ──────────► qty += 1, or new   │
//! │                                                     line with qty 1     │
//! │                                                                         │
//! │  "+" / "-" ─────────────► change_quantity() ──────► qty += delta;      │
//! │                                                     result ≤ 0 removes  │
//! │                                                     the line entirely   │
//! │                                                                         │
//! │  Trash icon ────────────► remove() ───────────────► line gone;         │
//! │                                                     no-op if absent     │
//! │                                                                         │
//! │  Checkout success ──────► clear() ────────────────► empty cart         │
//! │                                                                         │
//! │  INVARIANT: at most one line item per product id at any time.           │
//! │  INVARIANT: every line item has quantity ≥ 1.                           │
//! │  Totals are derived on demand, so they can never be stale.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Item
// =============================================================================

/// A line item in the shopping cart.
///
/// ## Design Notes
/// - `product_id`: Reference back to the catalog entry
/// - Display fields (`name`, `unit_price_paise`, `image_url`) are frozen
///   copies taken when the item is added. The cart never holds a live
///   reference into the catalog, so a catalog change cannot retroactively
///   alter items already in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Catalog id of the product.
    pub product_id: u32,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price in paise at time of adding (frozen).
    /// This is critical: we lock in the price when added to cart.
    pub unit_price_paise: i64,

    /// Image path at time of adding (frozen).
    pub image_url: String,

    /// Quantity in cart, always ≥ 1.
    pub quantity: i64,

    /// When this item was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new line item from a catalog product with quantity 1.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the catalog entry ever
    /// changed, this cart item would retain the original price.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            product_id: product.id,
            name: product.name.clone(),
            unit_price_paise: product.price_paise,
            image_url: product.image_url.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_paise(self.unit_price_paise)
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price() * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product increments quantity)
/// - Quantity is always ≥ 1 (a mutation that reaches 0 removes the line)
/// - Maximum distinct lines: [`MAX_CART_ITEMS`]
/// - Maximum quantity per line: [`MAX_ITEM_QUANTITY`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Read-only view of the line items, in insertion order.
    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity increases by 1
    /// - Product not in cart: a new line is inserted with quantity 1,
    ///   freezing the product's display fields
    pub fn add_product(&mut self, product: &Product) -> CoreResult<()> {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_qty = item.quantity + 1;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(CartItem::from_product(product));
        Ok(())
    }

    /// Adjusts a line item's quantity by a signed delta.
    ///
    /// ## Behavior
    /// - Resulting quantity ≤ 0: the line is removed entirely (not clamped)
    /// - Product not in cart: no-op
    /// - Resulting quantity above the cap: error, line left unchanged
    pub fn change_quantity(&mut self, product_id: u32, delta: i64) -> CoreResult<()> {
        let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) else {
            return Ok(());
        };

        let new_qty = item.quantity + delta;
        if new_qty <= 0 {
            self.remove(product_id);
            return Ok(());
        }
        if new_qty > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: new_qty,
                max: MAX_ITEM_QUANTITY,
            });
        }

        item.quantity = new_qty;
        Ok(())
    }

    /// Removes a line item by product id. No-op if the id is not in the cart.
    pub fn remove(&mut self, product_id: u32) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of distinct line items.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the cart total (sum of price × quantity per line).
    pub fn total_price(&self) -> Money {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether checkout is permitted (non-empty cart).
    pub fn can_checkout(&self) -> bool {
        !self.is_empty()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived cart summary handed to the view layer.
///
/// Recomputed from the cart after every mutation - it is a projection,
/// never independently stored state, so it cannot go stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Distinct line items.
    pub line_count: usize,

    /// Sum of quantities across all lines.
    pub total_quantity: i64,

    /// Sum of price × quantity per line, in paise.
    pub total_paise: i64,

    /// Whether the checkout action should be enabled.
    pub can_checkout: bool,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            total_paise: cart.total_price().paise(),
            can_checkout: cart.can_checkout(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
