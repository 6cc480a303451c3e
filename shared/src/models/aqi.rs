//! AQI category and gauge models (CPCB National AQI bands)

use serde::{Deserialize, Serialize};

/// Upper bound of the dashboard gauge
pub const GAUGE_MAX: f64 = 500.0;

/// National AQI category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    /// 0-50
    Good,
    /// 51-100
    Satisfactory,
    /// 101-200
    Moderate,
    /// 201-300
    Poor,
    /// 301-400
    VeryPoor,
    /// 401+
    Severe,
}

impl AqiCategory {
    /// Gauge band color
    pub fn color(&self) -> &'static str {
        match self {
            AqiCategory::Good => "#00b050",
            AqiCategory::Satisfactory => "#92d050",
            AqiCategory::Moderate => "#ffff00",
            AqiCategory::Poor => "#ff9900",
            AqiCategory::VeryPoor => "#ff0000",
            AqiCategory::Severe => "#c00000",
        }
    }

    /// Health advisory shown next to the gauge
    pub fn advisory(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Minimal impact",
            AqiCategory::Satisfactory => "Minor breathing discomfort to sensitive people",
            AqiCategory::Moderate => {
                "Breathing discomfort to people with lung disease, asthma and heart disease"
            }
            AqiCategory::Poor => "Breathing discomfort to most people on prolonged exposure",
            AqiCategory::VeryPoor => "Respiratory illness on prolonged exposure",
            AqiCategory::Severe => {
                "Affects healthy people and seriously impacts those with existing diseases"
            }
        }
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AqiCategory::Good => write!(f, "Good"),
            AqiCategory::Satisfactory => write!(f, "Satisfactory"),
            AqiCategory::Moderate => write!(f, "Moderate"),
            AqiCategory::Poor => write!(f, "Poor"),
            AqiCategory::VeryPoor => write!(f, "Very Poor"),
            AqiCategory::Severe => write!(f, "Severe"),
        }
    }
}

/// Classify an AQI value into its category.
///
/// Predictions are unbounded, so negative values land in Good and anything
/// above 400 is Severe.
pub fn classify_aqi(aqi: f64) -> AqiCategory {
    match aqi {
        a if a <= 50.0 => AqiCategory::Good,
        a if a <= 100.0 => AqiCategory::Satisfactory,
        a if a <= 200.0 => AqiCategory::Moderate,
        a if a <= 300.0 => AqiCategory::Poor,
        a if a <= 400.0 => AqiCategory::VeryPoor,
        _ => AqiCategory::Severe,
    }
}

/// Clamp a prediction onto the 0-500 gauge
pub fn gauge_value(aqi: f64) -> f64 {
    if aqi.is_nan() {
        return 0.0;
    }
    aqi.clamp(0.0, GAUGE_MAX)
}
