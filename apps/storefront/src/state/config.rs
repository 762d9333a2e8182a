//! # Configuration State
//!
//! Storefront settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ARANOZ_*`)
//! 2. Config file (`storefront.toml`)
//! 3. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "Aranoz"
//! currency_symbol = "$"
//! currency_decimals = 2
//! shipping_cents = 1000
//! require_auth_for_cart = true
//! ```
//!
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use aranoz_core::{Money, DEFAULT_SHIPPING_CENTS};

/// Largest supported number of currency decimal places.
pub const MAX_CURRENCY_DECIMALS: u8 = 4;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Store name (page titles, order confirmations)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Flat shipping charge per non-empty order, in cents
    pub shipping_cents: i64,

    /// Cart mutations and checkout need a signed-in user
    pub require_auth_for_cart: bool,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Aranoz".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            shipping_cents: DEFAULT_SHIPPING_CENTS,
            require_auth_for_cart: true,
        }
    }
}

impl ConfigState {
    /// Loads defaults, then the config file if one exists, then environment
    /// overrides.
    ///
    /// ## File Location
    /// - `ARANOZ_CONFIG` if set
    /// - otherwise the platform config dir, e.g.
    ///   `~/.config/aranoz-storefront/storefront.toml` on Linux
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => ConfigState::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        info!(
            store = %config.store_name,
            shipping_cents = config.shipping_cents,
            "configuration loaded"
        );
        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("ARANOZ_CONFIG") {
            return Some(PathBuf::from(path));
        }

        ProjectDirs::from("com", "aranoz", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(?path, "reading config file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses TOML; keys that are absent keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ConfigState = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that parse but cannot be used.
    ///
    /// ## Rules
    /// - `shipping_cents` is not negative
    /// - `currency_decimals` is at most [`MAX_CURRENCY_DECIMALS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shipping_cents < 0 {
            return Err(ConfigError::InvalidValue {
                key: "shipping_cents".to_string(),
                value: self.shipping_cents.to_string(),
            });
        }

        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(ConfigError::InvalidValue {
                key: "currency_decimals".to_string(),
                value: self.currency_decimals.to_string(),
            });
        }

        Ok(())
    }

    /// Applies `ARANOZ_*` overrides read through `lookup`.
    ///
    /// ## Variables
    /// - `ARANOZ_STORE_NAME`: Override store name
    /// - `ARANOZ_SHIPPING_CENTS`: Override shipping charge (non-negative integer)
    /// - `ARANOZ_REQUIRE_AUTH_FOR_CART`: `true`/`false`/`1`/`0`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(store_name) = lookup("ARANOZ_STORE_NAME") {
            self.store_name = store_name;
        }

        if let Some(raw) = lookup("ARANOZ_SHIPPING_CENTS") {
            self.shipping_cents = raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|cents| *cents >= 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "ARANOZ_SHIPPING_CENTS".to_string(),
                    value: raw.clone(),
                })?;
        }

        if let Some(raw) = lookup("ARANOZ_REQUIRE_AUTH_FOR_CART") {
            self.require_auth_for_cart = match raw.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "ARANOZ_REQUIRE_AUTH_FOR_CART".to_string(),
                        value: raw,
                    })
                }
            };
        }

        Ok(())
    }

    pub fn shipping(&self) -> Money {
        Money::from_cents(self.shipping_cents)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use aranoz_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    ///
    /// Decimals beyond [`MAX_CURRENCY_DECIMALS`] are clamped.
    pub fn format_currency(&self, cents: i64) -> String {
        let decimals = self.currency_decimals.min(MAX_CURRENCY_DECIMALS);
        let divisor = 10_i64.pow(u32::from(decimals));
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();
        let sign = if cents < 0 { "-" } else { "" };

        if decimals > 0 {
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.currency_symbol,
                whole.abs(),
                frac,
                width = usize::from(decimals)
            )
        } else {
            format!("{}{}{}", sign, self.currency_symbol, whole.abs())
        }
    }
}
