//! # Cart State
//!
//! Session-owned handle to the shopping cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` so the handle can be cloned into
//! whichever layer needs it while every mutation stays a single exclusive
//! read-modify-write. UI events arrive one at a time, so the lock is never
//! contended in practice.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI Action            Command                 Cart State Change         │
//! │  ─────────            ───────                 ─────────────────         │
//! │                                                                         │
//! │  Add to Cart ───────► add_to_cart() ────────► add_item(product, n)     │
//! │  +/- buttons ───────► update_cart_item() ───► update_quantity(id, n)   │
//! │  Remove ────────────► remove_from_cart() ───► remove_item(id)          │
//! │  Order placed ──────► place_order() ────────► clear()                  │
//! │  Header badge ──────► get_cart() ───────────► (read only)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use aranoz_core::Cart;

/// Shared cart handle.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ```rust
    /// use aranoz_storefront::state::CartState;
    ///
    /// let state = CartState::new();
    /// assert_eq!(state.with_cart(|cart| cart.count()), 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        // Cart edits are single Vec operations; a poisoned cart is still consistent.
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aranoz_core::Product;

    #[test]
    fn test_clones_share_one_cart() {
        let state = CartState::new();
        let handle = state.clone();
        let product = Product {
            id: "1".to_string(),
            name: "Lamp".to_string(),
            price_cents: 2500,
            image: String::new(),
            category: "Lighting".to_string(),
            description: String::new(),
            stock: 3,
        };

        handle.with_cart_mut(|cart| cart.add_item(&product, 2));

        assert_eq!(state.with_cart(|cart| cart.count()), 2);
    }
}
