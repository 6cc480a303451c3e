//! HTTP handlers for sessions, next-day predictions and horizon forecasts

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use shared::PollutantReadings;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::forecast::{ForecastService, HorizonForecast, NextDayPrediction};
use crate::services::session::Session;
use crate::AppState;

fn forecast_service(state: &AppState) -> ForecastService {
    ForecastService::new(
        state.forecaster.clone(),
        state.sessions.clone(),
        state.config.forecast.clone(),
    )
}

/// Start a new dashboard session
pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<Session>) {
    let session = state.sessions.create(state.config.forecast.seed_aqi).await;
    (StatusCode::CREATED, Json(session))
}

/// Get a session and its AQI history
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<Session>> {
    let session = state.sessions.get(session_id).await?;
    Ok(Json(session))
}

/// Reseed a session's history
pub async fn reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<Session>> {
    let session = state
        .sessions
        .reset(session_id, state.config.forecast.seed_aqi)
        .await?;
    Ok(Json(session))
}

/// End a session
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.sessions.delete(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Predict tomorrow's AQI
pub async fn predict_next_day(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(readings): Json<PollutantReadings>,
) -> AppResult<Json<NextDayPrediction>> {
    let prediction = forecast_service(&state)
        .predict_next(session_id, readings, Utc::now().date_naive())
        .await?;
    Ok(Json(prediction))
}

/// Query parameters for a horizon forecast
#[derive(Debug, Deserialize)]
pub struct HorizonQuery {
    pub steps: Option<usize>,
}

/// Forecast several days ahead without changing the session history
pub async fn forecast_horizon(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<HorizonQuery>,
    Json(readings): Json<PollutantReadings>,
) -> AppResult<Json<HorizonForecast>> {
    let forecast = forecast_service(&state)
        .forecast_horizon(session_id, readings, query.steps, Utc::now().date_naive())
        .await?;
    Ok(Json(forecast))
}
