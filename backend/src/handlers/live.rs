//! HTTP handlers for live station data

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{Pollutant, PollutantReadings};

use crate::error::{AppError, AppResult};
use crate::services::live::{LiveDataService, LiveLookup};
use crate::AppState;

/// Query parameters for a live lookup.
///
/// Any pollutant given here replaces the dashboard default used when the
/// live record lacks that field.
#[derive(Debug, Default, Deserialize)]
pub struct LiveQuery {
    pub city: String,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub no: Option<f64>,
    pub no2: Option<f64>,
    pub nox: Option<f64>,
    pub nh3: Option<f64>,
    pub co: Option<f64>,
    pub so2: Option<f64>,
    pub o3: Option<f64>,
    pub benzene: Option<f64>,
    pub toluene: Option<f64>,
}

impl LiveQuery {
    fn override_for(&self, pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::Pm25 => self.pm2_5,
            Pollutant::Pm10 => self.pm10,
            Pollutant::No => self.no,
            Pollutant::No2 => self.no2,
            Pollutant::Nox => self.nox,
            Pollutant::Nh3 => self.nh3,
            Pollutant::Co => self.co,
            Pollutant::So2 => self.so2,
            Pollutant::O3 => self.o3,
            Pollutant::Benzene => self.benzene,
            Pollutant::Toluene => self.toluene,
        }
    }

    /// Dashboard defaults with any caller overrides applied
    pub fn defaults(&self) -> PollutantReadings {
        let mut defaults = PollutantReadings::default();
        for pollutant in Pollutant::ALL {
            if let Some(value) = self.override_for(pollutant) {
                defaults.set(pollutant, value);
            }
        }
        defaults
    }
}

/// Fetch live readings for a city, falling back to defaults on failure
pub async fn get_live_readings(
    State(state): State<AppState>,
    Query(query): Query<LiveQuery>,
) -> AppResult<Json<LiveLookup>> {
    shared::validate_city(&query.city).map_err(|msg| AppError::Validation {
        field: "city".to_string(),
        message: msg.to_string(),
    })?;

    let service = LiveDataService::new(state.live_client.clone());
    let lookup = service.lookup(query.city.trim(), query.defaults()).await;
    Ok(Json(lookup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_defaults() {
        let query = LiveQuery {
            city: "Delhi".to_string(),
            benzene: Some(3.5),
            ..Default::default()
        };
        let defaults = query.defaults();
        assert_eq!(defaults.benzene, 3.5);
        assert_eq!(defaults.pm2_5, 100.0);
    }
}
