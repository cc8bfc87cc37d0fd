//! Auth stubs — login, signup, demo login, logout.
//!
//! There is no real authentication: any non-empty credentials succeed. The
//! service only manipulates the persisted flags and the signup email, after
//! waiting out the simulated network delay.

use serde::Serialize;
use tracing::info;

use crate::error::{Result, ValidationError};
use crate::latency::CommitTimer;
use crate::prefs::{PreferenceStore, storage_keys};

use super::guard::NavTarget;

/// Where a successful auth action sends the user, plus the toast copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthOutcome {
    pub target: NavTarget,
    pub message: String,
}

/// Coordinates the auth flag writes around the preference store.
#[derive(Clone)]
pub struct AuthService {
    store: PreferenceStore,
    timer: CommitTimer,
}

impl AuthService {
    pub fn new(store: PreferenceStore, timer: CommitTimer) -> Self {
        Self { store, timer }
    }

    /// Sign in. Requires non-empty email and password; routes to home when
    /// onboarding is already complete, otherwise to the onboarding screen.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome> {
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::FieldsRequired.into());
        }

        self.timer.pause().await;
        self.store
            .set_flag(storage_keys::IS_LOGGED_IN, true)
            .await?;

        let onboarded = self
            .store
            .get_flag(storage_keys::HAS_COMPLETED_ONBOARDING)
            .await?;
        info!(onboarded, "User logged in");

        Ok(if onboarded {
            AuthOutcome {
                target: NavTarget::Home,
                message: "Welcome back!".to_string(),
            }
        } else {
            AuthOutcome {
                target: NavTarget::Onboarding,
                message: "Login successful! Let's complete your profile.".to_string(),
            }
        })
    }

    /// Quick demo sign-in: no credentials, straight to onboarding.
    pub async fn demo_login(&self) -> Result<AuthOutcome> {
        self.timer.pause().await;
        self.store
            .set_flag(storage_keys::IS_LOGGED_IN, true)
            .await?;
        info!("Demo login");

        Ok(AuthOutcome {
            target: NavTarget::Onboarding,
            message: "Welcome to the demo! Let's set up your profile.".to_string(),
        })
    }

    /// Create an account. Stores the email, clears any stale onboarding flag
    /// so the quiz always runs, and signs the user in.
    pub async fn signup(&self, email: &str, password: &str, confirm: &str) -> Result<AuthOutcome> {
        if email.is_empty() || password.is_empty() || confirm.is_empty() {
            return Err(ValidationError::FieldsRequired.into());
        }
        if password != confirm {
            return Err(ValidationError::PasswordMismatch.into());
        }

        self.timer.pause().await;
        self.store
            .set_flag(storage_keys::IS_LOGGED_IN, true)
            .await?;
        self.store.set_user_email(email).await?;
        self.store
            .set_flag(storage_keys::HAS_COMPLETED_ONBOARDING, false)
            .await?;
        info!("Account created");

        Ok(AuthOutcome {
            target: NavTarget::Onboarding,
            message: "Account created successfully! Let's set up your profile.".to_string(),
        })
    }

    /// Sign out. Only the logged-in flag is cleared — preferences and the
    /// onboarding flag survive, so logging back in skips the quiz.
    pub async fn logout(&self) -> Result<AuthOutcome> {
        self.store
            .set_flag(storage_keys::IS_LOGGED_IN, false)
            .await?;
        info!("User logged out");

        Ok(AuthOutcome {
            target: NavTarget::Login,
            message: "You have been logged out".to_string(),
        })
    }
}
