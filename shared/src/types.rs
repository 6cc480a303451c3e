//! Common types used across the platform

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{classify_aqi, gauge_value, AqiCategory};

/// A single predicted AQI ready for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AqiReading {
    /// Raw model output
    pub aqi: f64,
    /// Value clamped to the 0-500 gauge
    pub gauge: f64,
    pub category: AqiCategory,
    pub advisory: String,
}

impl AqiReading {
    pub fn new(aqi: f64) -> Self {
        let category = classify_aqi(aqi);
        Self {
            aqi,
            gauge: gauge_value(aqi),
            category,
            advisory: category.advisory().to_string(),
        }
    }
}

/// One point on the forecast chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    /// Days ahead of the base date, starting at 1
    pub day: usize,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub reading: AqiReading,
}

/// Attach calendar dates to a horizon that starts the day after `base`
pub fn dated_forecast(base: NaiveDate, values: &[f64]) -> Vec<ForecastPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, aqi)| {
            let day = i + 1;
            ForecastPoint {
                day,
                date: base
                    .checked_add_days(Days::new(day as u64))
                    .unwrap_or(NaiveDate::MAX),
                reading: AqiReading::new(*aqi),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dated_forecast() {
        let base = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let points = dated_forecast(base, &[45.0, 320.0, 610.0]);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].day, 1);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(points[2].date, NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        assert_eq!(points[1].reading.category, AqiCategory::VeryPoor);
        assert_eq!(points[2].reading.gauge, 500.0);
        assert_eq!(points[2].reading.aqi, 610.0);
    }
}
