//! # Aranoz Storefront Library
//!
//! Session layer of the Aranoz storefront: the shopping cart, the signed-in
//! identity and the commands a presentation shell calls for each UI action.
//!
//! ## Module Organization
//! ```text
//! aranoz_storefront/
//! ├── lib.rs          ◄─── You are here (Storefront context & tracing)
//! ├── auth.rs         ◄─── Identity provider seam
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── auth.rs     ◄─── Auth state machine
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Product listing and lookup
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── checkout.rs ◄─── Checkout validation and order placement
//! │   ├── auth.rs     ◄─── Sign in / sign up / sign out
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Session Context
//! There is no process-wide store. The host builds one [`Storefront`] per
//! session and hands it to every command:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront                                           │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ Arc<Catalog> │ │  CartState   │ │  AuthState   │ │ ConfigState  │   │
//! │  │ (read-only)  │ │ (Arc<Mutex>) │ │ (Arc<Mutex>) │ │ (read-only)  │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Arc<dyn AuthProvider>  (injected by the host)                   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cloning a `Storefront` yields another handle to the same session.

pub mod auth;
pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use aranoz_core::Catalog;

use auth::{AuthError, AuthProvider};
use error::ApiError;
use state::{AuthState, CartState, ConfigState};

/// One shopping session.
#[derive(Clone)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    cart: CartState,
    auth: AuthState,
    config: Arc<ConfigState>,
    provider: Arc<dyn AuthProvider>,
}

impl Storefront {
    /// Creates a session with an empty cart and nobody signed in.
    pub fn new(catalog: Catalog, config: ConfigState, provider: Arc<dyn AuthProvider>) -> Self {
        Storefront {
            catalog: Arc::new(catalog),
            cart: CartState::new(),
            auth: AuthState::new(),
            config: Arc::new(config),
            provider,
        }
    }

    /// Builds a session from a JSON catalog and the loaded configuration.
    ///
    /// ## Startup Sequence
    /// ```text
    /// 1. ConfigState::load()      defaults → storefront.toml → ARANOZ_* env
    /// 2. Catalog::from_json()     ids unique, prices non-negative
    /// 3. Empty cart, auth Idle
    /// ```
    pub fn bootstrap(
        catalog_json: &str,
        provider: Arc<dyn AuthProvider>,
    ) -> Result<Self, ApiError> {
        let config = ConfigState::load()?;
        let catalog = Catalog::from_json(catalog_json)?;

        info!(
            store = %config.store_name,
            products = catalog.len(),
            "storefront session started"
        );
        Ok(Storefront::new(catalog, config, provider))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn provider(&self) -> &dyn AuthProvider {
        self.provider.as_ref()
    }

    /// Refuses cart mutations when the store requires a signed-in user and
    /// nobody is signed in.
    pub(crate) fn ensure_cart_access(&self) -> Result<(), ApiError> {
        if self.config.require_auth_for_cart && !self.auth.is_authenticated() {
            warn!("cart action refused: not signed in");
            return Err(AuthError::SignInRequired.into());
        }
        Ok(())
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=aranoz=trace` - Show trace for aranoz crates only
/// - Default: INFO, DEBUG for aranoz crates
///
/// Calling this more than once is harmless; later calls keep the first
/// subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,aranoz=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .try_init();
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::auth::SignInMethod;
    use crate::state::auth_fixtures::FakeProvider;

    pub(crate) const CATALOG_JSON: &str = r#"[
        {"id": "1", "name": "Quartz Belt Watch", "priceCents": 15000, "image": "/img/watch.png",
         "category": "Watches", "description": "Steel case", "stock": 5},
        {"id": "2", "name": "Wooden Chair", "priceCents": 4999, "image": "/img/chair.png",
         "category": "Furniture", "stock": 3},
        {"id": "3", "name": "Desk Lamp", "priceCents": 2500, "image": "/img/lamp.png",
         "category": "Lighting", "stock": 0},
        {"id": "4", "name": "Smart Watch", "priceCents": 20000, "image": "/img/smart.png",
         "category": "Watches", "stock": 2}
    ]"#;

    pub(crate) fn store_with_config(config: ConfigState) -> Storefront {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        Storefront::new(catalog, config, Arc::new(FakeProvider::new()))
    }

    pub(crate) fn store() -> Storefront {
        store_with_config(ConfigState::default())
    }

    pub(crate) async fn signed_in_store() -> Storefront {
        let store = store();
        store
            .auth()
            .authenticate(store.provider(), &SignInMethod::Google)
            .await
            .unwrap();
        store
    }
}
