//! Settings endpoints — guarded screen data plus the preference edit forms.
//!
//! Each form submits its own partial record; the store merges it over
//! whatever is already persisted.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::prefs::{HomeType, PreferenceRecord};

use super::screen_routes::guard_redirect;
use super::{ApiError, AppState};

/// GET /screens/settings
async fn settings_screen(State(state): State<AppState>) -> Result<Response, ApiError> {
    if let Some(redirect) = guard_redirect(&state, "/settings").await? {
        return Ok(redirect.into_response());
    }

    let prefs = state.prefs.preferences().await?.unwrap_or_default();
    let email = state
        .prefs
        .user_email()
        .await?
        .unwrap_or_else(|| "user@example.com".to_string());

    let body = serde_json::json!({
        "profile": {
            "firstName": prefs.first_name,
            "lastName": prefs.last_name,
            "email": email,
        },
        "home": {
            "address": prefs.address,
            "city": prefs.city.clone().unwrap_or_else(|| "Milton".to_string()),
            "province": prefs.province.clone().unwrap_or_else(|| "Ontario".to_string()),
            "postalCode": prefs.postal_code,
            "homeType": prefs.home_type,
        },
        "energy": {
            "provider": prefs.provider.clone().unwrap_or_else(|| "Ontario Power".to_string()),
            "meterNumber": prefs.meter_number,
            "plan": prefs.plan.clone().unwrap_or_else(|| "Time-of-Use".to_string()),
            "renewables": prefs.renewables,
        },
    });
    Ok(Json(body).into_response())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// PUT /api/settings/profile
async fn update_profile(
    State(state): State<AppState>,
    Json(form): Json<ProfileForm>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .prefs
        .patch(PreferenceRecord {
            first_name: form.first_name,
            last_name: form.last_name,
            ..Default::default()
        })
        .await?;
    Ok(Json(serde_json::json!({
        "message": "Profile updated successfully"
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeForm {
    pub home_type: Option<HomeType>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
}

/// PUT /api/settings/home
async fn update_home(
    State(state): State<AppState>,
    Json(form): Json<HomeForm>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .prefs
        .patch(PreferenceRecord {
            home_type: form.home_type,
            address: form.address,
            city: form.city,
            province: form.province,
            postal_code: form.postal_code,
            ..Default::default()
        })
        .await?;
    Ok(Json(serde_json::json!({
        "message": "Home settings updated successfully"
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyForm {
    pub provider: Option<String>,
    pub meter_number: Option<String>,
    pub plan: Option<String>,
    pub renewables: Option<Vec<String>>,
}

/// PUT /api/settings/energy
async fn update_energy(
    State(state): State<AppState>,
    Json(form): Json<EnergyForm>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .prefs
        .patch(PreferenceRecord {
            provider: form.provider,
            meter_number: form.meter_number,
            plan: form.plan,
            renewables: form.renewables,
            ..Default::default()
        })
        .await?;
    Ok(Json(serde_json::json!({
        "message": "Energy settings updated successfully"
    })))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/screens/settings", get(settings_screen))
        .route("/api/settings/profile", put(update_profile))
        .route("/api/settings/home", put(update_home))
        .route("/api/settings/energy", put(update_energy))
}
