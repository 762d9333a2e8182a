//! # Auth State
//!
//! Tracks who is signed in and the status of the latest provider request.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────┐  sign in   ┌─────────┐  identity   ┌───────────┐            │
//! │   │ Idle │ ─────────► │ Loading │ ──────────► │ Succeeded │            │
//! │   └──────┘            └─────────┘             └───────────┘            │
//! │      ▲                     │  error                 │                   │
//! │      │                     ▼                        │                   │
//! │      │               ┌──────────┐                   │                   │
//! │      │               │  Failed  │ ── sign in again ─┘ (via Loading)     │
//! │      │               └──────────┘                                       │
//! │      └──────────────── sign out (from any state) ───────────────────    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - Entering `Loading` clears any previous error.
//! - A failure keeps the previous user (if any) and stores the provider's
//!   message verbatim. Nothing is retried automatically.
//! - The lock is never held across the provider call.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use aranoz_core::{AuthStatus, AuthenticatedUser};

use crate::auth::{AuthError, AuthProvider, SignInMethod};

/// Point-in-time view of the auth state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSnapshot {
    pub user: Option<AuthenticatedUser>,
    pub status: AuthStatus,
    pub error: Option<String>,
}

/// Shared auth handle.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    inner: Arc<Mutex<AuthSnapshot>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    fn update<R>(&self, f: impl FnOnce(&mut AuthSnapshot) -> R) -> R {
        let mut snapshot = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut snapshot)
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        self.update(|s| s.clone())
    }

    pub fn status(&self) -> AuthStatus {
        self.update(|s| s.status)
    }

    pub fn current_user(&self) -> Option<AuthenticatedUser> {
        self.update(|s| s.user.clone())
    }

    /// True when a resolved identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.update(|s| s.user.is_some())
    }

    /// Returns the signed-in user or [`AuthError::SignInRequired`].
    pub fn require_user(&self) -> Result<AuthenticatedUser, AuthError> {
        self.current_user().ok_or(AuthError::SignInRequired)
    }

    /// Marks a provider request as started.
    pub fn begin(&self) {
        self.update(|s| {
            s.status = AuthStatus::Loading;
            s.error = None;
        });
    }

    /// Records a resolved identity.
    pub fn succeed(&self, user: AuthenticatedUser) {
        self.update(|s| {
            s.status = AuthStatus::Succeeded;
            s.user = Some(user);
            s.error = None;
        });
    }

    /// Records a failed request.
    pub fn fail(&self, message: impl Into<String>) {
        self.update(|s| {
            s.status = AuthStatus::Failed;
            s.error = Some(message.into());
        });
    }

    /// Clears the identity and returns to idle.
    pub fn reset(&self) {
        self.update(|s| *s = AuthSnapshot::default());
    }

    /// Runs one sign-in attempt against the provider, driving the status
    /// through `Loading` to `Succeeded` or `Failed`.
    pub async fn authenticate(
        &self,
        provider: &dyn AuthProvider,
        method: &SignInMethod,
    ) -> Result<AuthenticatedUser, AuthError> {
        self.begin();

        match method.call(provider).await {
            Ok(user) => {
                info!(uid = %user.uid, method = method.kind(), "signed in");
                self.succeed(user.clone());
                Ok(user)
            }
            Err(err) => {
                warn!(method = method.kind(), error = %err, "sign-in failed");
                self.fail(err.to_string());
                Err(err)
            }
        }
    }

    /// Signs out through the provider. On failure the state is left as it was.
    pub async fn sign_out(&self, provider: &dyn AuthProvider) -> Result<(), AuthError> {
        if let Err(err) = provider.sign_out().await {
            warn!(error = %err, "sign-out failed");
            return Err(err);
        }

        self.reset();
        info!("signed out");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;

    pub(crate) fn user(uid: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            uid: uid.to_string(),
            display_name: Some("Ana".to_string()),
            email: Some("a@b.com".to_string()),
            photo_url: None,
        }
    }

    /// Provider that accepts exactly one password.
    pub(crate) struct FakeProvider {
        pub(crate) password: &'static str,
        pub(crate) sign_out_fails: bool,
    }

    impl FakeProvider {
        pub(crate) fn new() -> Self {
            FakeProvider {
                password: "secret",
                sign_out_fails: false,
            }
        }
    }

    #[async_trait]
    impl AuthProvider for FakeProvider {
        async fn sign_in_with_google(&self) -> Result<AuthenticatedUser, AuthError> {
            Ok(user("google-uid"))
        }

        async fn sign_in_with_email(
            &self,
            email: &str,
            password: &str,
        ) -> Result<AuthenticatedUser, AuthError> {
            if password == self.password {
                Ok(AuthenticatedUser {
                    email: Some(email.to_string()),
                    ..user("email-uid")
                })
            } else {
                Err(AuthError::Provider("auth/wrong-password".to_string()))
            }
        }

        async fn sign_up_with_email(
            &self,
            email: &str,
            _password: &str,
        ) -> Result<AuthenticatedUser, AuthError> {
            if email == "taken@b.com" {
                return Err(AuthError::Provider("auth/email-already-in-use".to_string()));
            }
            Ok(AuthenticatedUser {
                email: Some(email.to_string()),
                display_name: None,
                ..user("new-uid")
            })
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            if self.sign_out_fails {
                Err(AuthError::Provider("network error".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_starts_idle_and_anonymous() {
        let state = AuthState::new();
        assert_eq!(state.status(), AuthStatus::Idle);
        assert!(!state.is_authenticated());
        assert_eq!(state.require_user(), Err(AuthError::SignInRequired));
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let state = AuthState::new();
        state.fail("boom");
        assert_eq!(state.snapshot().error.as_deref(), Some("boom"));

        state.begin();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.status, AuthStatus::Loading);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn test_successful_sign_in() {
        let state = AuthState::new();
        let provider = FakeProvider::new();

        let signed_in = state
            .authenticate(&provider, &SignInMethod::Google)
            .await
            .unwrap();

        assert_eq!(signed_in.uid, "google-uid");
        assert_eq!(state.status(), AuthStatus::Succeeded);
        assert_eq!(state.current_user(), Some(signed_in));
    }

    #[tokio::test]
    async fn test_failed_sign_in_keeps_message_verbatim() {
        let state = AuthState::new();
        let provider = FakeProvider::new();
        let method = SignInMethod::Email {
            email: "a@b.com".to_string(),
            password: "wrong".to_string(),
        };

        let err = state.authenticate(&provider, &method).await.unwrap_err();

        assert_eq!(err, AuthError::Provider("auth/wrong-password".to_string()));
        let snapshot = state.snapshot();
        assert_eq!(snapshot.status, AuthStatus::Failed);
        assert_eq!(snapshot.error.as_deref(), Some("auth/wrong-password"));
        assert!(snapshot.user.is_none());
    }

    #[tokio::test]
    async fn test_sign_out_resets_to_idle() {
        let state = AuthState::new();
        let provider = FakeProvider::new();
        state
            .authenticate(&provider, &SignInMethod::Google)
            .await
            .unwrap();

        state.sign_out(&provider).await.unwrap();

        assert_eq!(state.snapshot(), AuthSnapshot::default());
    }

    #[tokio::test]
    async fn test_failed_sign_out_keeps_user() {
        let state = AuthState::new();
        let provider = FakeProvider {
            sign_out_fails: true,
            ..FakeProvider::new()
        };
        state
            .authenticate(&provider, &SignInMethod::Google)
            .await
            .unwrap();

        assert!(state.sign_out(&provider).await.is_err());
        assert!(state.is_authenticated());
    }
}
