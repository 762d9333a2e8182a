//! # Identity Provider Seam
//!
//! The storefront never talks to a concrete identity provider. The host
//! injects an [`AuthProvider`] and the storefront only observes what it
//! returns: an [`AuthenticatedUser`] or an error message.
//!
//! ```text
//! ┌──────────────────┐   sign_in_*()    ┌──────────────────────────┐
//! │    AuthState     │ ───────────────► │  dyn AuthProvider        │
//! │  idle/loading/   │                  │  (hosted identity        │
//! │  succeeded/failed│ ◄─────────────── │   service, test fake...) │
//! └──────────────────┘  user | message  └──────────────────────────┘
//! ```

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use aranoz_core::AuthenticatedUser;

/// Errors surfaced by the auth layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The provider rejected the request. The message is shown verbatim.
    #[error("{0}")]
    Provider(String),

    /// An action needs a signed-in user and there is none.
    #[error("Please sign in to continue")]
    SignInRequired,
}

/// External identity provider.
///
/// Implementations own every provider-specific detail (popups, tokens,
/// sessions). Each call either yields an identity or an error message.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Federated sign-in (the "Continue with Google" button).
    async fn sign_in_with_google(&self) -> Result<AuthenticatedUser, AuthError>;

    async fn sign_in_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AuthError>;

    /// Creates the account and signs it in.
    async fn sign_up_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Which provider call a sign-in attempt uses.
#[derive(Clone, PartialEq, Eq)]
pub enum SignInMethod {
    Google,
    Email { email: String, password: String },
    SignUp { email: String, password: String },
}

impl SignInMethod {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SignInMethod::Google => "google",
            SignInMethod::Email { .. } => "email",
            SignInMethod::SignUp { .. } => "sign_up",
        }
    }

    pub(crate) async fn call(
        &self,
        provider: &dyn AuthProvider,
    ) -> Result<AuthenticatedUser, AuthError> {
        match self {
            SignInMethod::Google => provider.sign_in_with_google().await,
            SignInMethod::Email { email, password } => {
                provider.sign_in_with_email(email, password).await
            }
            SignInMethod::SignUp { email, password } => {
                provider.sign_up_with_email(email, password).await
            }
        }
    }
}

// Passwords must never reach the logs.
impl fmt::Debug for SignInMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignInMethod::Google => f.write_str("Google"),
            SignInMethod::Email { email, .. } => f
                .debug_struct("Email")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            SignInMethod::SignUp { email, .. } => f
                .debug_struct("SignUp")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}
