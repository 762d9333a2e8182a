//! # Error Types
//!
//! Domain-specific error types for aranoz-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  aranoz-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Single-field input failures                    │
//! │                                                                         │
//! │  apps/storefront errors                                                │
//! │  ├── AuthError        - Identity provider failures                     │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Presentation           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations have no error type at all: they never fail.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog records share the same id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// The catalog payload could not be parsed.
    #[error("Invalid catalog data: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// Product has no stock left.
    #[error("{name} is out of stock")]
    OutOfStock { name: String },

    /// An order was requested for an empty cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// The checkout form has one or more invalid fields.
    ///
    /// Carries the number of failing fields; the field messages live on
    /// [`crate::CheckoutValidation`].
    #[error("Checkout form has {0} invalid field(s)")]
    CheckoutInvalid(usize),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The `Display` output of each variant is the exact message shown next to
/// the offending form field, so `field` holds a human label ("ZIP code"),
/// not a key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// The value does not have the expected shape.
    #[error("{field} is invalid")]
    Invalid { field: String },

    /// The value must be an exact run of digits.
    #[error("{field} must be {digits} digits")]
    Digits { field: String, digits: String },

    /// The value must follow a textual pattern such as `MM/YY`.
    #[error("{field} must be in {format} format")]
    Format { field: String, format: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is shorter than allowed.
    #[error("{field} must be at least {min} characters.")]
    TooShort { field: String, min: usize },

    /// Sign-in form is missing email or password.
    #[error("Please enter both email and password.")]
    MissingCredentials,

    /// Sign-up form has a blank field.
    #[error("Please fill in all fields.")]
    IncompleteForm,

    /// Password and confirmation differ.
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
