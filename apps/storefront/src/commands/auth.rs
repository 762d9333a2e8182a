//! # Auth Commands
//!
//! Sign-in, sign-up and sign-out, one command per button of the sign-in
//! dialog.
//!
//! ## Dialog Flow
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Sign In                                 │
//! │  ┌────────────────────────────────────┐  │
//! │  │  Continue with Google              │──┼──► sign_in_with_google
//! │  └────────────────────────────────────┘  │
//! │  Email     [                    ]        │
//! │  Password  [                    ]        │
//! │  ┌────────────┐                          │
//! │  │  Sign In   │──────────────────────────┼──► sign_in_with_email
//! │  └────────────┘                          │
//! │  No account? Sign up ────────────────────┼──► sign_up_with_email
//! └──────────────────────────────────────────┘
//! ```
//!
//! Email forms are checked locally first; a local failure never reaches the
//! provider and leaves the auth state untouched. Provider failures land in
//! the auth state (`status = failed`, `error = message`) and are returned as
//! `AUTH_FAILED`.

use tracing::{debug, warn};

use aranoz_core::validation::{validate_sign_in, validate_sign_up};
use aranoz_core::ValidationError;

use crate::auth::SignInMethod;
use crate::error::ApiError;
use crate::state::AuthSnapshot;
use crate::Storefront;

/// Auth state as seen by the presentation layer: `{ user, status, error }`.
pub type AuthResponse = AuthSnapshot;

fn refuse(err: ValidationError) -> ApiError {
    warn!(error = %err, "auth form refused");
    ApiError::validation(err.to_string())
}

async fn authenticate(store: &Storefront, method: SignInMethod) -> Result<AuthResponse, ApiError> {
    store.auth().authenticate(store.provider(), &method).await?;
    Ok(store.auth().snapshot())
}

/// Gets the current auth state.
pub fn get_auth(store: &Storefront) -> AuthResponse {
    debug!("get_auth command");
    store.auth().snapshot()
}

/// Signs in through the federated provider.
pub async fn sign_in_with_google(store: &Storefront) -> Result<AuthResponse, ApiError> {
    debug!("sign_in_with_google command");
    authenticate(store, SignInMethod::Google).await
}

/// Signs in with email and password.
pub async fn sign_in_with_email(
    store: &Storefront,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    debug!("sign_in_with_email command");

    validate_sign_in(email, password).map_err(refuse)?;

    authenticate(
        store,
        SignInMethod::Email {
            email: email.trim().to_string(),
            password: password.to_string(),
        },
    )
    .await
}

/// Creates an account and signs it in.
///
/// ## Local Checks (in order)
/// 1. All three fields present
/// 2. Password and confirmation match
/// 3. Password has at least 6 characters
pub async fn sign_up_with_email(
    store: &Storefront,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<AuthResponse, ApiError> {
    debug!("sign_up_with_email command");

    validate_sign_up(email, password, confirm_password).map_err(refuse)?;

    authenticate(
        store,
        SignInMethod::SignUp {
            email: email.trim().to_string(),
            password: password.to_string(),
        },
    )
    .await
}

/// Signs out. The cart is kept; when the store requires sign-in it simply
/// becomes read-only until the next sign-in.
pub async fn sign_out(store: &Storefront) -> Result<AuthResponse, ApiError> {
    debug!("sign_out command");

    store.auth().sign_out(store.provider()).await?;
    Ok(store.auth().snapshot())
}
