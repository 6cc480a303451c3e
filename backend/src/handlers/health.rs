//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model_features: usize,
    pub live_data: String,
    pub active_sessions: usize,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let live_data = if state.live_client.has_api_key() {
        "configured"
    } else {
        "fallback_only"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_features: state.forecaster.schema().len(),
        live_data: live_data.to_string(),
        active_sessions: state.sessions.len().await,
    })
}
