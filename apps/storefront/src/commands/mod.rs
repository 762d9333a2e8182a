//! # Commands Module
//!
//! Every action the presentation shell can take.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Product listing and lookup
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── checkout.rs ◄─── Form validation and order placement
//! ├── auth.rs     ◄─── Sign in / sign up / sign out
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Presentation shell                                                     │
//! │  ──────────────────                                                     │
//! │  "Add to cart" clicked on product 42                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust                                                                   │
//! │  ────                                                                   │
//! │  fn add_to_cart(                                                        │
//! │      store: &Storefront,      ◄── Session context                      │
//! │      product_id: &str,        ◄── From the UI                          │
//! │      quantity: Option<i64>,   ◄── Optional param                       │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (serde, camelCase)                                            │
//! │         ▼                                                               │
//! │  Shell receives: { items: [...], totals: {...} }                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the auth commands are `async`; they await the identity provider.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
