//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │   Form   │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                 │              │
//! │                   add_to_cart                       place_order        │
//! │                   update_cart_item                  (checkout.rs)      │
//! │                   remove_from_cart                       │              │
//! │                        │                                 ▼              │
//! │                   clear_cart ──────────────────► (back to empty)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating command is refused with `UNAUTHORIZED` when the store
//! requires a signed-in user and there is none.

use serde::{Deserialize, Serialize};
use tracing::debug;

use aranoz_core::validation::validate_quantity;
use aranoz_core::{Cart, CartItem, CartTotals, CoreError, Money};

use crate::error::ApiError;
use crate::Storefront;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl CartResponse {
    pub(crate) fn from_cart(cart: &Cart, shipping: Money) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: cart.totals(shipping),
        }
    }
}

fn respond(store: &Storefront, cart: &Cart) -> CartResponse {
    CartResponse::from_cart(cart, store.config().shipping())
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌────────────────────────────────────────────────────────────────┐
/// │  Shopping Cart                                                 │
/// ├────────────────────────────────────────────────────────────────┤
/// │  Quartz Belt Watch      [-] 2 [+]   $300.00   Remove           │
/// │  Wooden Chair           [-] 1 [+]    $49.99   Remove           │
/// ├────────────────────────────────────────────────────────────────┤
/// │  Subtotal                                     $349.99          │
/// │  Shipping                                      $10.00          │
/// │  Total                                        $359.99          │
/// └────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(store: &Storefront) -> CartResponse {
    debug!("get_cart command");
    store.cart().with_cart(|c| respond(store, c))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases
/// - Product not in cart: added with a snapshot of its display attributes
/// - Unknown id → `NOT_FOUND`; no stock left → `OUT_OF_STOCK`
/// - Line quantity would pass `MAX_ITEM_QUANTITY` (999) → `VALIDATION_ERROR`
///
/// ## Arguments
/// * `product_id` - Catalog id to add
/// * `quantity` - Quantity to add (default: 1)
pub fn add_to_cart(
    store: &Storefront,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    store.ensure_cart_access()?;
    validate_quantity(quantity).map_err(CoreError::from)?;

    let product = store.catalog().require(product_id)?;
    if product.is_out_of_stock() {
        return Err(CoreError::OutOfStock {
            name: product.name.clone(),
        }
        .into());
    }

    store
        .cart()
        .with_cart_mut(|c| -> Result<CartResponse, CoreError> {
            let in_cart = c.get(&product.id).map_or(0, |i| i.quantity);
            validate_quantity(in_cart.saturating_add(quantity))?;
            c.add_item(product, quantity);
            Ok(respond(store, c))
        })
        .map_err(ApiError::from)
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity 0 or below: removes the line
/// - Quantity above `MAX_ITEM_QUANTITY` (999): `VALIDATION_ERROR`
/// - Id not in cart: nothing changes, the current cart is returned
pub fn update_cart_item(
    store: &Storefront,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    store.ensure_cart_access()?;
    if quantity > 0 {
        validate_quantity(quantity).map_err(CoreError::from)?;
    }

    Ok(store.cart().with_cart_mut(|c| {
        if !c.update_quantity(product_id, quantity) {
            debug!(product_id = %product_id, "update_cart_item: not in cart");
        }
        respond(store, c)
    }))
}

/// Removes a line from the cart. Removing an absent id is a no-op.
pub fn remove_from_cart(store: &Storefront, product_id: &str) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");

    store.ensure_cart_access()?;

    Ok(store.cart().with_cart_mut(|c| {
        c.remove_item(product_id);
        respond(store, c)
    }))
}

/// Clears all items from the cart.
pub fn clear_cart(store: &Storefront) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");

    store.ensure_cart_access()?;

    Ok(store.cart().with_cart_mut(|c| {
        c.clear();
        respond(store, c)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::test_support::{signed_in_store, store};
    use aranoz_core::MAX_ITEM_QUANTITY;

    #[tokio::test]
    async fn test_add_and_read_back() {
        let store = signed_in_store().await;

        add_to_cart(&store, "1", Some(2)).unwrap();
        let response = add_to_cart(&store, "2", None).unwrap();

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.totals.total_quantity, 3);
        assert_eq!(response.totals.subtotal_cents, 2 * 15000 + 4999);
        assert_eq!(response.totals.shipping_cents, 1000);
        assert_eq!(get_cart(&store), response);
    }

    #[tokio::test]
    async fn test_add_rejects_unknown_and_out_of_stock() {
        let store = signed_in_store().await;

        let err = add_to_cart(&store, "404", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = add_to_cart(&store, "3", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfStock);

        let err = add_to_cart(&store, "1", Some(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(get_cart(&store).items.is_empty());
    }

    #[tokio::test]
    async fn test_update_and_remove() {
        let store = signed_in_store().await;
        add_to_cart(&store, "1", Some(1)).unwrap();
        add_to_cart(&store, "2", Some(1)).unwrap();

        let response = update_cart_item(&store, "1", 5).unwrap();
        assert_eq!(response.totals.total_quantity, 6);

        let response = update_cart_item(&store, "1", 0).unwrap();
        assert_eq!(response.items.len(), 1);

        let response = remove_from_cart(&store, "2").unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.totals.total_cents, 0);

        // Absent ids are silent no-ops.
        assert!(remove_from_cart(&store, "2").is_ok());
        assert!(update_cart_item(&store, "2", 3).unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_quantity_ceiling() {
        let store = signed_in_store().await;

        let err = add_to_cart(&store, "1", Some(i64::MAX)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(get_cart(&store).items.is_empty());

        add_to_cart(&store, "1", Some(MAX_ITEM_QUANTITY)).unwrap();
        let err = add_to_cart(&store, "1", None).unwrap_err();
        assert_eq!(err.message, "Quantity must be between 1 and 999");
        assert_eq!(get_cart(&store).totals.total_quantity, MAX_ITEM_QUANTITY);

        let err = update_cart_item(&store, "1", i64::MAX).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_cart(&store).totals.total_quantity, MAX_ITEM_QUANTITY);

        let response = update_cart_item(&store, "1", 2).unwrap();
        assert_eq!(response.totals.subtotal_cents, 30000);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = signed_in_store().await;
        add_to_cart(&store, "1", Some(3)).unwrap();

        let response = clear_cart(&store).unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.totals.total_quantity, 0);
        assert_eq!(response.totals.subtotal_cents, 0);
    }

    #[test]
    fn test_mutations_need_sign_in() {
        let store = store();

        let err = add_to_cart(&store, "1", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(
            remove_from_cart(&store, "1").unwrap_err().code,
            ErrorCode::Unauthorized
        );
        assert!(get_cart(&store).items.is_empty());
    }

    #[test]
    fn test_anonymous_cart_when_not_required() {
        let mut config = crate::state::ConfigState::default();
        config.require_auth_for_cart = false;
        let store = crate::test_support::store_with_config(config);

        let response = add_to_cart(&store, "1", None).unwrap();
        assert_eq!(response.totals.total_quantity, 1);
    }
}
