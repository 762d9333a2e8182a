//! # aranoz-core: Pure Business Logic for the Aranoz Storefront
//!
//! This crate holds the storefront's domain logic as plain data and pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Aranoz Storefront Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation layer (out of scope)            │   │
//! │  │    Products ──► Product Detail ──► Cart ──► Checkout            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/storefront                              │   │
//! │  │    CartState, AuthState, commands, AuthProvider seam            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ aranoz-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  money   │ │ catalog  │ │   cart   │ │ checkout         │  │   │
//! │  │   │  Money   │ │ Catalog  │ │   Cart   │ │ validate_checkout│  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, AuthenticatedUser, AuthStatus)
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Read-only product lookup table
//! - [`cart`] - The cart state container and derived totals
//! - [`checkout`] - Checkout form and its field-level validator
//! - [`validation`] - Single-field and credential rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use aranoz_core::{Cart, Product};
//!
//! let product = Product {
//!     id: "1".to_string(),
//!     name: "Quartz Belt Watch".to_string(),
//!     price_cents: 15000,
//!     image: "/img/watch.png".to_string(),
//!     category: "Watches".to_string(),
//!     description: String::new(),
//!     stock: 10,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&product, 2);
//! assert_eq!(cart.count(), 2);
//! assert_eq!(cart.subtotal().cents(), 30000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals};
pub use catalog::{Catalog, CategoryFilter};
pub use checkout::{validate_checkout, CheckoutField, CheckoutForm, CheckoutValidation};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat shipping charge applied to every non-empty order ($10.00).
pub const DEFAULT_SHIPPING_CENTS: i64 = 1000;

/// Maximum quantity of a single product in the cart.
///
/// Keeps line totals far from `i64` overflow and catches typos such as 1000
/// instead of 10.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Minimum password length accepted by the sign-up form.
pub const MIN_PASSWORD_LENGTH: usize = 6;
