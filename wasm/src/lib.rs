//! WebAssembly module for the AQI Forecast Platform
//!
//! Provides client-side computation for:
//! - AQI category and gauge display
//! - Feature vector previews
//! - Horizon forecasts with a downloaded linear model artifact

use serde::Deserialize;
use shared::{AqiHistory, FeatureSchema, Forecaster, LinearModel, PollutantReadings};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("aqi-forecast-wasm loaded"));
}

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

/// Parse readings, rejecting negative or non-finite concentrations
fn parse_readings(json: &str) -> Result<PollutantReadings, JsValue> {
    let readings: PollutantReadings =
        serde_json::from_str(json).map_err(|e| js_error("Invalid readings JSON", e))?;
    match shared::invalid_reading(&readings) {
        Some(pollutant) => Err(JsValue::from_str(&format!(
            "Invalid reading for {}",
            pollutant
        ))),
        None => Ok(readings),
    }
}

/// An empty string means a freshly seeded history
fn parse_history(json: &str) -> Result<AqiHistory, JsValue> {
    if json.trim().is_empty() {
        return Ok(AqiHistory::seeded());
    }
    serde_json::from_str(json).map_err(|e| js_error("Invalid history JSON", e))
}

/// Classify an AQI value into its CPCB category label
#[wasm_bindgen]
pub fn classify_aqi(aqi: f64) -> String {
    shared::classify_aqi(aqi).to_string()
}

/// Hex color for the category of an AQI value
#[wasm_bindgen]
pub fn aqi_color(aqi: f64) -> String {
    shared::classify_aqi(aqi).color().to_string()
}

/// Clamp a prediction onto the 0-500 gauge
#[wasm_bindgen]
pub fn gauge_value(aqi: f64) -> f64 {
    shared::gauge_value(aqi)
}

/// Build the ordered feature vector for `readings_json` and `history_json`
#[wasm_bindgen]
pub fn assemble_features_json(readings_json: &str, history_json: &str) -> Result<String, JsValue> {
    let readings = parse_readings(readings_json)?;
    let history = parse_history(history_json)?;
    let features = shared::assemble_features(&readings, &history);
    serde_json::to_string(&features).map_err(|e| js_error("Serialization failed", e))
}

#[derive(Deserialize)]
struct HorizonRequest {
    model: serde_json::Value,
    readings: PollutantReadings,
    #[serde(default)]
    history: Option<AqiHistory>,
    steps: usize,
}

/// Forecast `steps` days ahead in the browser.
///
/// Expects `{"model": {...}, "readings": {...}, "history": [...], "steps": n}`
/// and returns the predicted AQI values, one step ahead first.
#[wasm_bindgen]
pub fn forecast_horizon_json(request_json: &str) -> Result<String, JsValue> {
    let forecast = run_horizon(request_json)?;
    serde_json::to_string(&forecast).map_err(|e| js_error("Serialization failed", e))
}

/// Same as [`forecast_horizon_json`], returned as a typed array for charting
#[wasm_bindgen]
pub fn forecast_horizon_array(request_json: &str) -> Result<js_sys::Float64Array, JsValue> {
    let forecast = run_horizon(request_json)?;
    Ok(js_sys::Float64Array::from(forecast.as_slice()))
}

fn run_horizon(request_json: &str) -> Result<Vec<f64>, JsValue> {
    let request: HorizonRequest =
        serde_json::from_str(request_json).map_err(|e| js_error("Invalid forecast request", e))?;

    if let Some(pollutant) = shared::invalid_reading(&request.readings) {
        return Err(JsValue::from_str(&format!("Invalid reading for {}", pollutant)));
    }
    shared::validate_horizon(request.steps, shared::MAX_HORIZON_DAYS)
        .map_err(JsValue::from_str)?;

    let model = LinearModel::from_json(&request.model.to_string())
        .map_err(|e| js_error("Invalid model artifact", e))?;
    let schema = model.schema();
    if schema != FeatureSchema::default() {
        return Err(JsValue::from_str(
            "Model columns do not match the assembled feature layout",
        ));
    }

    let history = request.history.unwrap_or_default();
    let forecaster = Forecaster::new(model, schema);
    forecaster
        .forecast_horizon(&request.readings, &history, request.steps)
        .map_err(|e| js_error("Forecast failed", e))
}


/// Error paths build `JsValue`s, which only exist inside a wasm runtime
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use serde_json::json;
    use shared::FEATURE_NAMES;
    use wasm_bindgen_test::*;

    fn request(steps: usize, pm2_5: f64) -> String {
        let mut coefficients = vec![0.0; 13];
        coefficients[11] = 1.0;
        let mut readings = PollutantReadings::default();
        readings.pm2_5 = pm2_5;
        json!({
            "model": {
                "feature_names": FEATURE_NAMES,
                "coefficients": coefficients,
                "intercept": 10.0,
            },
            "readings": readings,
            "steps": steps,
        })
        .to_string()
    }

    #[wasm_bindgen_test]
    fn test_forecast_horizon_array() {
        let values = forecast_horizon_array(&request(2, 100.0)).unwrap();
        assert_eq!(values.to_vec(), vec![160.0, 170.0]);
    }

    #[wasm_bindgen_test]
    fn test_negative_reading_rejected() {
        let err = forecast_horizon_json(&request(2, -1.0)).unwrap_err();
        assert!(err.as_string().unwrap().contains("PM2.5"));
    }

    #[wasm_bindgen_test]
    fn test_horizon_over_limit_rejected() {
        assert!(forecast_horizon_json(&request(31, 100.0)).is_err());
    }

    #[wasm_bindgen_test]
    fn test_bad_history_rejected() {
        let readings = serde_json::to_string(&PollutantReadings::default()).unwrap();
        assert!(assemble_features_json(&readings, "[1.0]").is_err());
    }
}
