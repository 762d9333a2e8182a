//! # Cart
//!
//! The cart state container: an ordered list of line items plus the totals
//! derived from it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action              Operation                Cart Change            │
//! │  ─────────              ─────────                ───────────            │
//! │                                                                         │
//! │  Add to Cart ──────────► add_item() ───────────► push or qty += n      │
//! │                                                                         │
//! │  +/- buttons ──────────► update_quantity() ────► qty = n (n ≤ 0 drops) │
//! │                                                                         │
//! │  Remove ───────────────► remove_item() ────────► retain(id != x)       │
//! │                                                                         │
//! │  Order placed ─────────► clear() ──────────────► items.clear()         │
//! │                                                                         │
//! │  Header badge ─────────► count() ──────────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! - No operation fails. Operations naming an id that is not in the cart are
//!   silent no-ops; `remove_item` and `update_quantity` report through their
//!   `bool` return whether anything changed.
//! - Items are unique by `product_id`; adding an existing product increases
//!   its quantity.
//! - Every item has `quantity >= 1`. Setting a quantity of zero or below
//!   removes the item instead.
//! - Totals are always derived from the items, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// One line in the cart.
///
/// Display attributes are a snapshot of the product at the time it was first
/// added, so the cart renders consistently even if the catalog is reloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    pub product_id: String,

    pub name: String,

    /// Price in cents at time of adding (frozen)
    pub unit_price_cents: i64,

    pub image: String,

    pub category: String,

    /// Always >= 1
    pub quantity: i64,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart item from a product and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            image: product.image.clone(),
            category: product.category.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart. Insertion order is add order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds `quantity` units of a product.
    ///
    /// - Product already in cart: its quantity grows by `quantity`,
    ///   saturating at `i64::MAX`. Stock and quantity limits belong to the
    ///   caller.
    /// - Product not in cart: a new item is appended.
    /// - `quantity < 1`: nothing happens.
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        if quantity < 1 {
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(CartItem::from_product(product, quantity));
    }

    /// Removes the item with the given product id.
    ///
    /// Returns `false` (and leaves the cart untouched) when the id is absent,
    /// so calling it twice is harmless.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != initial_len
    }

    /// Sets the quantity of an item.
    ///
    /// - Absent id: no-op, returns `false`.
    /// - `quantity <= 0`: the item is removed.
    /// - Otherwise the quantity is replaced.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Items in add order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.get(product_id).is_some()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines (the header badge number).
    pub fn count(&self) -> i64 {
        self.items
            .iter()
            .fold(0, |total, i| total.saturating_add(i.quantity))
    }

    /// Σ unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Totals with a flat shipping charge. An empty cart ships for free.
    pub fn totals(&self, shipping: Money) -> CartTotals {
        let subtotal = self.subtotal();
        let shipping = if self.is_empty() { Money::zero() } else { shipping };

        CartTotals {
            item_count: self.line_count(),
            total_quantity: self.count(),
            subtotal_cents: subtotal.cents(),
            shipping_cents: shipping.cents(),
            total_cents: (subtotal + shipping).cents(),
        }
    }
}

/// Cart totals summary for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub shipping_cents: i64,
    pub total_cents: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
