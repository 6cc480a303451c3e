//! AQI Forecast Platform - Backend Server
//!
//! Serves next-day and multi-day AQI forecasts from a trained regression
//! model, with live station lookups and downloadable reports.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::{AqiForecaster, LiveDataClient};
use services::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub forecaster: Arc<AqiForecaster>,
    pub sessions: SessionStore,
    pub live_client: LiveDataClient,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aqi_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting AQI Forecast Server");
    tracing::info!("Environment: {}", config.environment);

    // A missing or malformed artifact is fatal at startup
    tracing::info!("Loading model from {}", config.model.artifact_path);
    let forecaster = external::load_forecaster(&config.model.artifact_path)?;
    tracing::info!(
        features = forecaster.schema().len(),
        "Model loaded"
    );

    let live_client = LiveDataClient::new(
        config.live_data.api_key.clone(),
        config.live_data.api_endpoint.clone(),
    );
    if !live_client.has_api_key() {
        tracing::warn!("No live data API key configured; live lookups will use defaults");
    }

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        forecaster: Arc::new(forecaster),
        sessions: SessionStore::new(),
        live_client,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AQI Forecast Platform API v1.0"
}
