//! Configuration management for the AQI forecast server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AQI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Model artifact configuration
    pub model: ModelConfig,

    /// Live air-quality API configuration
    pub live_data: LiveDataConfig,

    /// Forecast behaviour
    pub forecast: ForecastConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Path to the serialized regression model
    pub artifact_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LiveDataConfig {
    /// Air-quality resource endpoint
    pub api_endpoint: String,

    /// API key; live lookup falls back to defaults when empty
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastConfig {
    /// Default number of days in a horizon forecast
    pub horizon_days: usize,

    /// Largest horizon a client may request
    pub max_horizon_days: usize,

    /// Placeholder AQI used to seed new session histories
    pub seed_aqi: f64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("AQI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8501)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("model.artifact_path", "models/aqi_model.json")?
            .set_default(
                "live_data.api_endpoint",
                "https://api.data.gov.in/resource/3b01bcb8-0b14-4abf-b6f2-c1bfd384ba69",
            )?
            .set_default("live_data.api_key", "")?
            .set_default("forecast.horizon_days", 5)?
            .set_default("forecast.max_horizon_days", shared::MAX_HORIZON_DAYS as i64)?
            .set_default("forecast.seed_aqi", shared::SEED_AQI)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AQI_ prefix)
            .add_source(
                Environment::with_prefix("AQI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl ServerConfig {
    /// `host:port` to listen on
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8501,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_days: 5,
            max_horizon_days: shared::MAX_HORIZON_DAYS,
            seed_aqi: shared::SEED_AQI,
        }
    }
}
