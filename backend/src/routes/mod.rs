//! Route definitions for the AQI forecast platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/sessions", session_routes())
        .route("/live", get(handlers::get_live_readings))
        .route("/reports", post(handlers::download_report))
}

/// Session, prediction and forecast routes
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_session))
        .route(
            "/:session_id",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route("/:session_id/reset", post(handlers::reset_session))
        .route("/:session_id/predict", post(handlers::predict_next_day))
        .route("/:session_id/forecast", post(handlers::forecast_horizon))
}
