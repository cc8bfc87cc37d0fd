//! Onboarding endpoints — status plus the flow transitions.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::onboarding::{AdvanceOutcome, OnboardingAnswers};
use crate::onboarding::quiz::QuizQuestion;

use super::{ApiError, AppState};

/// Snapshot of the flow for the questionnaire UI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStatus {
    pub step: usize,
    pub total_steps: usize,
    pub progress_percent: u32,
    pub completed: bool,
    pub question: &'static QuizQuestion,
    pub answers: OnboardingAnswers,
}

/// GET /api/onboarding
async fn status(State(state): State<AppState>) -> Json<FlowStatus> {
    let flow = state.flow.read().await;
    Json(FlowStatus {
        step: flow.step(),
        total_steps: flow.total_steps(),
        progress_percent: (((flow.step() + 1) * 100) / flow.total_steps()) as u32,
        completed: flow.is_completed(),
        question: flow.current_question(),
        answers: flow.answers().clone(),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// POST /api/onboarding/name
async fn set_name(
    State(state): State<AppState>,
    Json(req): Json<NameRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .flow
        .write()
        .await
        .set_name(&req.first_name, &req.last_name)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[derive(Debug, Deserialize)]
pub struct ValueRequest {
    pub value: String,
}

/// POST /api/onboarding/select — single-select steps.
async fn select(
    State(state): State<AppState>,
    Json(req): Json<ValueRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.flow.write().await.select(&req.value)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// POST /api/onboarding/toggle — multi-select steps.
async fn toggle(
    State(state): State<AppState>,
    Json(req): Json<ValueRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.flow.write().await.toggle(&req.value)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// Wire form of a successful Advance.
#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum AdvanceResponse {
    Advanced { step: usize },
    Completed { target: &'static str, message: String },
}

/// POST /api/onboarding/advance
async fn advance(State(state): State<AppState>) -> Result<Json<AdvanceResponse>, ApiError> {
    let mut flow = state.flow.write().await;
    let outcome = flow.advance(&state.prefs, &state.timer).await?;
    let response = match outcome {
        AdvanceOutcome::Advanced { step } => AdvanceResponse::Advanced { step },
        AdvanceOutcome::Completed { target, message } => AdvanceResponse::Completed {
            target: target.path(),
            message,
        },
    };
    Ok(Json(response))
}

/// POST /api/onboarding/back
async fn back(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let step = state.flow.write().await.retreat()?;
    Ok(Json(serde_json::json!({ "step": step })))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/onboarding", get(status))
        .route("/api/onboarding/name", post(set_name))
        .route("/api/onboarding/select", post(select))
        .route("/api/onboarding/toggle", post(toggle))
        .route("/api/onboarding/advance", post(advance))
        .route("/api/onboarding/back", post(back))
}
