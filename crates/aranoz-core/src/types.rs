//! # Domain Types
//!
//! Core domain types shared by the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌───────────────────┐   ┌─────────────────┐     │
//! │  │    Product      │   │ AuthenticatedUser │   │   AuthStatus    │     │
//! │  │  ─────────────  │   │  ───────────────  │   │  ─────────────  │     │
//! │  │  id             │   │  uid              │   │  Idle           │     │
//! │  │  name           │   │  display_name?    │   │  Loading        │     │
//! │  │  price_cents    │   │  email?           │   │  Succeeded      │     │
//! │  │  category       │   │  photo_url?       │   │  Failed         │     │
//! │  │  stock          │   └───────────────────┘   └─────────────────┘     │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `AuthenticatedUser` is owned by the identity provider; the storefront only
//! carries it around and checks whether one is present.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier, unique within the catalog.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price in cents.
    pub price_cents: i64,

    /// Image URI.
    pub image: String,

    /// Category label used by the product listing filter.
    pub category: String,

    #[serde(default)]
    pub description: String,

    /// Units available. Zero means out of stock.
    pub stock: i64,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks if the product has no stock left.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.stock <= 0
    }
}

// =============================================================================
// Authenticated User
// =============================================================================

/// Identity record issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuthenticatedUser {
    /// Provider-issued stable user id.
    pub uid: String,

    pub display_name: Option<String>,

    pub email: Option<String>,

    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl AuthenticatedUser {
    /// Name to greet the user with: display name, else email, else uid.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.uid)
    }
}

// =============================================================================
// Auth Status
// =============================================================================

/// Status of the most recent identity provider request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AuthStatus {
    /// No request made yet, or the user signed out.
    #[default]
    Idle,
    /// A provider request is in flight.
    Loading,
    /// The last request returned an identity.
    Succeeded,
    /// The last request failed; the message is kept alongside.
    Failed,
}

impl AuthStatus {
    /// Returns true while a provider request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, AuthStatus::Loading)
    }
}

impl std::fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthStatus::Idle => write!(f, "idle"),
            AuthStatus::Loading => write!(f, "loading"),
            AuthStatus::Succeeded => write!(f, "succeeded"),
            AuthStatus::Failed => write!(f, "failed"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
