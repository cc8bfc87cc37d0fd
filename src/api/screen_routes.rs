//! Screen endpoints — each navigation runs the route guard first and answers
//! with either screen data or a redirect to the guard's target.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::{NaiveDate, Timelike, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::guard::{self, RouteDecision};
use crate::content::schedule::NewTask;
use crate::content::{actions, analytics, energy, microgrid};

use super::auth_routes::route_config_for;
use super::{ApiError, AppState};

/// Evaluate the guard for a screen path. `Some(redirect)` means the screen
/// must not render. Flags are read fresh on every call.
pub(super) async fn guard_redirect(
    state: &AppState,
    path: &str,
) -> Result<Option<Redirect>, ApiError> {
    let flags = state.prefs.auth_flags().await?;
    match guard::evaluate(flags, route_config_for(path), path) {
        RouteDecision::Render => Ok(None),
        RouteDecision::Redirect { to, .. } => Ok(Some(Redirect::to(to.path()))),
    }
}

/// GET /screens/home — the dashboard.
async fn home(State(state): State<AppState>) -> Result<Response, ApiError> {
    if let Some(redirect) = guard_redirect(&state, "/").await? {
        return Ok(redirect.into_response());
    }

    let prefs = state.prefs.preferences().await?;
    let greeting = format!("Hello, {}", state.prefs.full_name().await?);
    let location = match prefs.as_ref().and_then(|p| p.home_type) {
        Some(home_type) => format!("{} in Milton, ON", home_type.display()),
        None => "Milton, ON".to_string(),
    };

    let body = serde_json::json!({
        "greeting": greeting,
        "location": location,
        "currentStatus": energy::current_status(Utc::now().hour()),
        "outlook": energy::outlook(),
        "nextOptimalWindow": energy::next_optimal_window(),
        "smartActions": actions::smart_actions(prefs.as_ref()),
        "microgridPreview": &microgrid::nearby()[..2],
    });
    Ok(Json(body).into_response())
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    #[serde(default)]
    pub range: Option<String>,
}

/// GET /screens/analytics?range=day|week|month
async fn analytics_screen(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Response, ApiError> {
    if let Some(redirect) = guard_redirect(&state, "/analytics").await? {
        return Ok(redirect.into_response());
    }

    let range = query
        .range
        .as_deref()
        .and_then(analytics::TimeRange::parse)
        .unwrap_or(analytics::TimeRange::Day);

    let body = serde_json::json!({
        "range": range,
        "usage": analytics::usage(range),
        "totals": analytics::totals(range),
        "sources": analytics::source_breakdown(),
        "devices": analytics::device_breakdown(),
    });
    Ok(Json(body).into_response())
}

/// GET /screens/microgrid
async fn microgrid_screen(State(state): State<AppState>) -> Result<Response, ApiError> {
    if let Some(redirect) = guard_redirect(&state, "/microgrid").await? {
        return Ok(redirect.into_response());
    }

    let mut requested = Vec::new();
    for grid in microgrid::nearby() {
        if state.joins.has_requested(grid.id).await {
            requested.push(grid.id);
        }
    }

    let body = serde_json::json!({
        "nearby": microgrid::nearby(),
        "memberships": microgrid::memberships(),
        "joinRequests": requested,
    });
    Ok(Json(body).into_response())
}

/// POST /api/microgrid/{id}/join
async fn join_microgrid(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    if state.joins.request(&id).await {
        Ok(Json(serde_json::json!({
            "ok": true,
            "message": "Join request sent successfully!",
        }))
        .into_response())
    } else {
        Ok((
            StatusCode::CONFLICT,
            Json(serde_json::json!({ "error": "Cannot join this grid" })),
        )
            .into_response())
    }
}

#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// GET /screens/schedule?date=2026-08-06
async fn schedule_screen(
    State(state): State<AppState>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Response, ApiError> {
    if let Some(redirect) = guard_redirect(&state, "/schedule").await? {
        return Ok(redirect.into_response());
    }

    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let body = serde_json::json!({
        "date": date,
        "tasks": state.schedule.on_date(date).await,
        "allTasks": state.schedule.all().await,
    });
    Ok(Json(body).into_response())
}

/// POST /api/schedule
async fn create_task(
    State(state): State<AppState>,
    Json(new): Json<NewTask>,
) -> Result<Response, ApiError> {
    let task = state.schedule.create(new).await?;
    Ok((StatusCode::CREATED, Json(task)).into_response())
}

/// DELETE /api/schedule/{id}
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    if state.schedule.delete(id).await {
        Ok(Json(serde_json::json!({ "ok": true })).into_response())
    } else {
        Ok((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Task not found" })),
        )
            .into_response())
    }
}

/// GET /screens/login — public screen; logged-in users are bounced away.
async fn login_screen(State(state): State<AppState>) -> Result<Response, ApiError> {
    if let Some(redirect) = guard_redirect(&state, "/login").await? {
        return Ok(redirect.into_response());
    }
    let body = serde_json::json!({
        "title": "GridLocked",
        "subtitle": "Optimize your home energy usage",
    });
    Ok(Json(body).into_response())
}

/// GET /screens/signup
async fn signup_screen(State(state): State<AppState>) -> Result<Response, ApiError> {
    if let Some(redirect) = guard_redirect(&state, "/signup").await? {
        return Ok(redirect.into_response());
    }
    let body = serde_json::json!({
        "title": "GridLocked",
        "subtitle": "Create an account",
    });
    Ok(Json(body).into_response())
}

/// GET /screens/onboarding — requires auth, not onboarding.
async fn onboarding_screen(State(state): State<AppState>) -> Result<Response, ApiError> {
    if let Some(redirect) = guard_redirect(&state, "/onboarding").await? {
        return Ok(redirect.into_response());
    }
    let flow = state.flow.read().await;
    let body = serde_json::json!({
        "title": "Setup your profile",
        "step": flow.step(),
        "totalSteps": flow.total_steps(),
    });
    Ok(Json(body).into_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/screens/home", get(home))
        .route("/screens/login", get(login_screen))
        .route("/screens/signup", get(signup_screen))
        .route("/screens/onboarding", get(onboarding_screen))
        .route("/screens/analytics", get(analytics_screen))
        .route("/screens/microgrid", get(microgrid_screen))
        .route("/screens/schedule", get(schedule_screen))
        .route("/api/microgrid/{id}/join", post(join_microgrid))
        .route("/api/schedule", post(create_task))
        .route("/api/schedule/{id}", delete(delete_task))
}
