//! # State Module
//!
//! Session state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of one application-wide store reached through a global, each
//! concern gets its own handle and commands declare exactly which ones they
//! need. Handles are cheap to clone and are passed explicitly.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Storefront                                 │   │
//! │  │  catalog, cart, auth, config, provider                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartState   │  │  AuthState   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  store_name      │              │
//! │  │    Cart      │  │  AuthSnap-   │  │  shipping_cents  │              │
//! │  │  >>          │  │  shot>>      │  │  require_auth    │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartState / AuthState: exclusive access per operation               │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod cart;
mod config;

pub use auth::{AuthSnapshot, AuthState};
pub use cart::CartState;
pub use config::{ConfigError, ConfigState};

#[cfg(test)]
pub(crate) use auth::tests as auth_fixtures;
