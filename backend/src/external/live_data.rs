//! Live air-quality API client
//!
//! Fetches current station readings for a city from the data.gov.in
//! air-quality resource. Only the first returned record is used, and any
//! pollutant missing from it keeps the caller's default.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{Pollutant, PollutantReadings};
use thiserror::Error;

/// Failure modes of a live lookup
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LiveDataError {
    #[error("Live data API key not configured")]
    MissingApiKey,

    #[error("Live data request failed: {0}")]
    Request(String),

    #[error("Live data API error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse live data response: {0}")]
    Parse(String),

    #[error("No live records for {0}")]
    NoRecords(String),
}

/// Live data API client
#[derive(Clone)]
pub struct LiveDataClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Readings taken from the first live record for a city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiveReadings {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
    pub readings: PollutantReadings,
    /// Pollutants that were absent or non-numeric and kept their default
    pub defaulted: Vec<Pollutant>,
}

/// Resource response envelope
#[derive(Debug, Deserialize)]
struct RecordsResponse {
    #[serde(default)]
    records: Vec<Value>,
}

impl LiveDataClient {
    /// Create a new LiveDataClient
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Fetch the latest readings for `city`, filling gaps from `defaults`
    pub async fn fetch_city(
        &self,
        city: &str,
        defaults: &PollutantReadings,
    ) -> Result<LiveReadings, LiveDataError> {
        if !self.has_api_key() {
            return Err(LiveDataError::MissingApiKey);
        }

        tracing::debug!(city, "requesting live air-quality records");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("api-key", self.api_key.as_str()),
                ("format", "json"),
                ("limit", "1"),
                ("filters[city]", city),
            ])
            .send()
            .await
            .map_err(|e| LiveDataError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LiveDataError::Status { status, body });
        }

        let data: RecordsResponse = response
            .json()
            .await
            .map_err(|e| LiveDataError::Parse(e.to_string()))?;

        let record = data
            .records
            .first()
            .ok_or_else(|| LiveDataError::NoRecords(city.to_string()))?;

        let (readings, defaulted) = readings_from_record(record, defaults);
        if !defaulted.is_empty() {
            tracing::debug!(city, ?defaulted, "live record missing pollutant values");
        }

        Ok(LiveReadings {
            city: city.to_string(),
            station: text_field(record, "station"),
            last_update: text_field(record, "last_update"),
            readings,
            defaulted,
        })
    }
}

/// Pull each pollutant out of a record, keeping the default for any field
/// that is absent or not numeric
pub fn readings_from_record(
    record: &Value,
    defaults: &PollutantReadings,
) -> (PollutantReadings, Vec<Pollutant>) {
    let mut readings = *defaults;
    let mut defaulted = Vec::new();

    for pollutant in Pollutant::ALL {
        match record.get(pollutant.record_key()).and_then(numeric_value) {
            Some(value) => readings.set(pollutant, value),
            None => defaulted.push(pollutant),
        }
    }

    (readings, defaulted)
}

/// Numbers arrive either as JSON numbers or as strings ("NA" for gaps)
fn numeric_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn text_field(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Local HTTP stubs standing in for the live resource
#[cfg(test)]
pub(crate) mod test_support {
    use axum::{http::StatusCode, routing::get, routing::MethodRouter, Router};

    /// Serve `handler` at `/resource` on an ephemeral port and return its URL
    pub(crate) async fn serve_stub(handler: MethodRouter) -> String {
        let app = Router::new().route("/resource", handler);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/resource", addr)
    }

    /// Always answers 500
    pub(crate) async fn failing_stub() -> String {
        serve_stub(get(|| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "upstream down")
        }))
        .await
    }

    /// Answers 200 with a body that is not JSON
    pub(crate) async fn garbled_stub() -> String {
        serve_stub(get(|| async { "<html>maintenance</html>" })).await
    }
}
