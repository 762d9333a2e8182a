//! # Checkout Commands
//!
//! Validates the checkout form and turns the cart into an order.
//!
//! ## Place Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  place_order(form)                                                      │
//! │     │                                                                   │
//! │     ├── signed in? (when required) ───── no ──► UNAUTHORIZED            │
//! │     ├── validate_checkout(form) ──── invalid ──► VALIDATION_ERROR       │
//! │     ├── cart empty? ─────────────────── yes ──► CART_ERROR              │
//! │     │                                                                   │
//! │     └── snapshot items + totals, clear cart ──► OrderConfirmation       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Payment details are validated for shape only; they are never stored in
//! the confirmation or written to the logs.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use aranoz_core::{
    validate_checkout, CartItem, CartTotals, CheckoutForm, CheckoutValidation, CoreError,
};

use crate::error::ApiError;
use crate::Storefront;

/// What the customer sees after a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: String,
    pub store_name: String,
    /// RFC 3339 timestamp
    pub placed_at: String,
    pub customer_name: String,
    pub email: String,
    /// Signed-in user, if any
    pub user_id: Option<String>,
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

/// Validates the checkout form field by field.
///
/// Never fails: the result carries one message per invalid field so the
/// form can show them inline.
pub fn validate_checkout_form(form: &CheckoutForm) -> CheckoutValidation {
    debug!("validate_checkout_form command");

    let validation = validate_checkout(form);
    if !validation.valid {
        debug!(invalid_fields = validation.errors.len(), "checkout form has errors");
    }
    validation
}

/// Places the order for the current cart.
///
/// The cart is emptied only when an order is produced.
pub fn place_order(store: &Storefront, form: &CheckoutForm) -> Result<OrderConfirmation, ApiError> {
    debug!("place_order command");

    store.ensure_cart_access()?;

    if let Err(err) = validate_checkout(form).into_result() {
        warn!(error = %err, "order refused: invalid checkout form");
        return Err(err.into());
    }

    let shipping = store.config().shipping();
    let (items, totals) = store.cart().with_cart_mut(|c| {
        if c.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        let snapshot = (c.items().to_vec(), c.totals(shipping));
        c.clear();
        Ok(snapshot)
    })?;

    let confirmation = OrderConfirmation {
        order_id: Uuid::new_v4().to_string(),
        store_name: store.config().store_name.clone(),
        placed_at: Utc::now().to_rfc3339(),
        customer_name: format!("{} {}", form.first_name.trim(), form.last_name.trim()),
        email: form.email.trim().to_string(),
        user_id: store.auth().current_user().map(|u| u.uid),
        items,
        totals,
    };

    info!(
        order_id = %confirmation.order_id,
        items = confirmation.totals.total_quantity,
        total = %store.config().format_currency(confirmation.totals.total_cents),
        "order placed"
    );

    Ok(confirmation)
}
