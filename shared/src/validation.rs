//! Validation utilities for the AQI forecast platform

use crate::models::{Pollutant, PollutantReadings};

/// Longest horizon the dashboard will forecast
pub const MAX_HORIZON_DAYS: usize = 30;

/// Validate a forecast horizon length
pub fn validate_horizon(steps: usize, max_steps: usize) -> Result<(), &'static str> {
    if steps > max_steps {
        return Err("Forecast horizon exceeds the configured maximum");
    }
    Ok(())
}

/// Validate a city name for live-data lookup
pub fn validate_city(city: &str) -> Result<(), &'static str> {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        return Err("City name is required");
    }
    if trimmed.len() > 100 {
        return Err("City name must be at most 100 characters");
    }
    if !trimmed
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '.')
    {
        return Err("City name contains invalid characters");
    }
    Ok(())
}

/// Find the first pollutant reading that is negative or not finite
pub fn invalid_reading(readings: &PollutantReadings) -> Option<Pollutant> {
    readings
        .iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
        .map(|(p, _)| p)
}
