//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Command Function: Result<T, ApiError>                                  │
//! │         │                                                               │
//! │         ├── CoreError::ProductNotFound ──────► NOT_FOUND                │
//! │         ├── CoreError::CheckoutInvalid ──────► VALIDATION_ERROR         │
//! │         ├── AuthError::SignInRequired ───────► UNAUTHORIZED             │
//! │         ├── AuthError::Provider(msg) ────────► AUTH_FAILED (msg as-is)  │
//! │         └── Success ─────────────────────────► response payload         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Serialized with a machine-readable `code` and a human-readable `message`:
//! ```json
//! { "code": "NOT_FOUND", "message": "Product not found: 42" }
//! ```

use serde::Serialize;

use aranoz_core::CoreError;

use crate::auth::AuthError;
use crate::state::ConfigError;

/// API error returned from commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Action requires a signed-in user
    Unauthorized,

    /// The identity provider rejected the request
    AuthFailed,

    /// Product cannot be added right now
    OutOfStock,

    /// Cart operation refused (e.g. ordering an empty cart)
    CartError,

    /// Configuration could not be loaded
    ConfigError,

    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::OutOfStock { .. } => ApiError::new(ErrorCode::OutOfStock, err.to_string()),
            CoreError::EmptyCart => ApiError::cart(err.to_string()),
            CoreError::CheckoutInvalid(_) => ApiError::validation(err.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::DuplicateProduct(_) | CoreError::InvalidCatalog(_) => {
                tracing::error!(error = %err, "catalog error reached a command");
                ApiError::new(ErrorCode::Internal, "Product catalog is unavailable")
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::SignInRequired => ApiError::new(ErrorCode::Unauthorized, err.to_string()),
            AuthError::Provider(message) => ApiError::new(ErrorCode::AuthFailed, message),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
