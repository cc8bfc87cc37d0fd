//! HTTP API — thin axum transport over the app core.

mod auth_routes;
mod onboarding_routes;
mod screen_routes;
mod settings_routes;

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use crate::auth::AuthService;
use crate::content::microgrid::JoinRequests;
use crate::content::schedule::ScheduleBook;
use crate::error::{Error, OnboardingError};
use crate::latency::CommitTimer;
use crate::onboarding::OnboardingFlow;
use crate::prefs::PreferenceStore;

/// Shared state for all routes.
#[derive(Clone)]
pub struct AppState {
    pub prefs: PreferenceStore,
    pub auth: AuthService,
    pub timer: CommitTimer,
    /// Single-user app: one flow, reset on signup/demo login.
    pub flow: Arc<RwLock<OnboardingFlow>>,
    pub schedule: Arc<ScheduleBook>,
    pub joins: Arc<JoinRequests>,
}

impl AppState {
    pub fn new(prefs: PreferenceStore, timer: CommitTimer) -> Self {
        let auth = AuthService::new(prefs.clone(), timer);
        Self {
            prefs,
            auth,
            timer,
            flow: Arc::new(RwLock::new(OnboardingFlow::new())),
            schedule: Arc::new(ScheduleBook::seeded()),
            joins: Arc::new(JoinRequests::new()),
        }
    }
}

/// Build the full application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes::routes())
        .merge(onboarding_routes::routes())
        .merge(screen_routes::routes())
        .merge(settings_routes::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Maps core errors onto HTTP responses. Validation failures are the
/// transient-notification case: a 422 with the user-facing message.
pub struct ApiError(pub Error);

impl<E: Into<Error>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            Error::Onboarding(OnboardingError::Validation(e)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            Error::Onboarding(OnboardingError::AlreadyCompleted)
            | Error::Onboarding(OnboardingError::WrongStepKind) => {
                (StatusCode::CONFLICT, self.0.to_string())
            }
            _ => {
                tracing::error!(error = %self.0, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };
        (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
    }
}
