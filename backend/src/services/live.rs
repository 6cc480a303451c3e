//! Live-data lookup service
//!
//! Wraps the live API client so a failed lookup never aborts the dashboard:
//! the caller always gets readings back, tagged with where they came from.

use serde::Serialize;
use shared::{Pollutant, PollutantReadings};

use crate::external::live_data::{LiveDataClient, LiveDataError, LiveReadings};

/// Where the returned readings came from
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReadingSource {
    Live,
    Fallback,
}

/// Result of a live lookup as shown on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct LiveLookup {
    pub city: String,
    pub source: ReadingSource,
    pub readings: PollutantReadings,
    /// Pollutants filled from defaults
    pub defaulted: Vec<Pollutant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Clone)]
pub struct LiveDataService {
    client: LiveDataClient,
}

impl LiveDataService {
    pub fn new(client: LiveDataClient) -> Self {
        Self { client }
    }

    /// Look up current readings for `city`, falling back to `defaults`
    pub async fn lookup(&self, city: &str, defaults: PollutantReadings) -> LiveLookup {
        let outcome = self.client.fetch_city(city, &defaults).await;
        Self::resolve(city, defaults, outcome)
    }

    fn resolve(
        city: &str,
        defaults: PollutantReadings,
        outcome: Result<LiveReadings, LiveDataError>,
    ) -> LiveLookup {
        match outcome {
            Ok(live) => {
                let warning = (!live.defaulted.is_empty()).then(|| {
                    let names: Vec<&str> =
                        live.defaulted.iter().map(|p| p.feature_name()).collect();
                    format!("No live value for {}; using defaults", names.join(", "))
                });
                LiveLookup {
                    city: live.city,
                    source: ReadingSource::Live,
                    readings: live.readings,
                    defaulted: live.defaulted,
                    station: live.station,
                    last_update: live.last_update,
                    warning,
                }
            }
            Err(err) => {
                tracing::warn!(city, error = %err, "live lookup failed; using fallback readings");
                LiveLookup {
                    city: city.to_string(),
                    source: ReadingSource::Fallback,
                    readings: defaults,
                    defaulted: Pollutant::ALL.to_vec(),
                    station: None,
                    last_update: None,
                    warning: Some(err.to_string()),
                }
            }
        }
    }
}
