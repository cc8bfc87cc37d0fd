//! Auth endpoints and the route-guard decision endpoint.

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::auth::guard::{self, RouteConfig, RouteDecision};
use crate::auth::AuthOutcome;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthOutcome>, ApiError> {
    Ok(Json(state.auth.login(&req.email, &req.password).await?))
}

/// POST /api/auth/demo — quick demo sign-in, restarts the questionnaire.
async fn demo_login(State(state): State<AppState>) -> Result<Json<AuthOutcome>, ApiError> {
    let outcome = state.auth.demo_login().await?;
    state.flow.write().await.reset();
    Ok(Json(outcome))
}

/// POST /api/auth/signup — creates the account and restarts the questionnaire.
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<AuthOutcome>, ApiError> {
    let outcome = state
        .auth
        .signup(&req.email, &req.password, &req.confirm_password)
        .await?;
    state.flow.write().await.reset();
    Ok(Json(outcome))
}

/// POST /api/auth/logout
async fn logout(State(state): State<AppState>) -> Result<Json<AuthOutcome>, ApiError> {
    Ok(Json(state.auth.logout().await?))
}

#[derive(Debug, Deserialize)]
pub struct GuardQuery {
    pub path: String,
}

/// Wire form of a guard decision.
#[derive(Debug, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardResponse {
    Render,
    Redirect {
        to: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        from: Option<String>,
    },
}

/// GET /api/route?path=/settings
///
/// Evaluates the guard for a navigation. Flags are read fresh per request.
async fn route_decision(
    State(state): State<AppState>,
    Query(query): Query<GuardQuery>,
) -> Result<Json<GuardResponse>, ApiError> {
    let flags = state.prefs.auth_flags().await?;
    let config = route_config_for(&query.path);
    let response = match guard::evaluate(flags, config, &query.path) {
        RouteDecision::Render => GuardResponse::Render,
        RouteDecision::Redirect { to, from } => GuardResponse::Redirect {
            to: to.path(),
            from,
        },
    };
    Ok(Json(response))
}

/// Guard configuration per screen path. Unknown paths are treated as
/// protected screens (the default).
pub fn route_config_for(path: &str) -> RouteConfig {
    match path {
        "/login" | "/signup" => RouteConfig::public(),
        "/onboarding" => RouteConfig::auth_only(),
        _ => RouteConfig::default(),
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/demo", post(demo_login))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/logout", post(logout))
        .route("/api/route", get(route_decision))
}
