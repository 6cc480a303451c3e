//! Downloadable AQI reports

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{classify_aqi, gauge_value};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Report request
#[derive(Debug, Deserialize, Validate)]
pub struct ReportInput {
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    /// Next-day prediction
    pub predicted_aqi: f64,
    /// Optional multi-day forecast, day one first
    #[serde(default)]
    pub horizon: Vec<f64>,
}

/// One CSV row
#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub city: String,
    pub kind: &'static str,
    pub day: usize,
    pub date: NaiveDate,
    pub aqi: String,
    pub gauge: String,
    pub category: String,
    pub advisory: &'static str,
    pub generated_at: String,
}

pub struct ReportService;

impl ReportService {
    /// Build report rows: the next-day prediction then each horizon day
    pub fn rows(input: &ReportInput, generated_at: DateTime<Utc>) -> Vec<ReportRow> {
        let base = generated_at.date_naive();
        let stamp = generated_at.to_rfc3339();
        let row = |kind: &'static str, day: usize, aqi: f64| {
            let category = classify_aqi(aqi);
            ReportRow {
                city: input.city.trim().to_string(),
                kind,
                day,
                date: base
                    .checked_add_days(Days::new(day as u64))
                    .unwrap_or(base),
                aqi: format!("{:.2}", aqi),
                gauge: format!("{:.2}", gauge_value(aqi)),
                category: category.to_string(),
                advisory: category.advisory(),
                generated_at: stamp.clone(),
            }
        };

        std::iter::once(row("next_day", 1, input.predicted_aqi))
            .chain(
                input
                    .horizon
                    .iter()
                    .enumerate()
                    .map(|(i, aqi)| row("forecast", i + 1, *aqi)),
            )
            .collect()
    }

    /// Render the report as CSV
    pub fn render_csv(input: &ReportInput, generated_at: DateTime<Utc>) -> AppResult<String> {
        input.validate()?;
        shared::validate_city(&input.city).map_err(|msg| AppError::Validation {
            field: "city".to_string(),
            message: msg.to_string(),
        })?;
        if !input.predicted_aqi.is_finite() {
            return Err(AppError::Validation {
                field: "predicted_aqi".to_string(),
                message: "Predicted AQI must be a finite number".to_string(),
            });
        }

        let mut wtr = csv::Writer::from_writer(vec![]);
        for row in Self::rows(input, generated_at) {
            wtr.serialize(row)
                .map_err(|e| AppError::Report(format!("CSV serialization error: {}", e)))?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| AppError::Report(format!("CSV writer error: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| AppError::Report(format!("UTF-8 conversion error: {}", e)))
    }

    /// Attachment file name for a city
    pub fn file_name(city: &str, generated_at: DateTime<Utc>) -> String {
        let slug: String = city
            .trim()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect();
        format!("aqi_report_{}_{}.csv", slug, generated_at.format("%Y%m%d"))
    }
}
