//! Forecast service: next-day predictions and multi-day horizons per session

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use shared::{dated_forecast, AqiReading, ForecastPoint, PollutantReadings};
use uuid::Uuid;
use validator::Validate;

use crate::config::ForecastConfig;
use crate::error::{AppError, AppResult};
use crate::external::AqiForecaster;
use crate::services::session::SessionStore;

/// Forecast service
#[derive(Clone)]
pub struct ForecastService {
    forecaster: Arc<AqiForecaster>,
    sessions: SessionStore,
    config: ForecastConfig,
}

/// Next-day prediction result
#[derive(Debug, Serialize)]
pub struct NextDayPrediction {
    pub session_id: Uuid,
    pub date: NaiveDate,
    pub prediction: AqiReading,
    pub history: Vec<f64>,
}

/// Multi-day forecast result
#[derive(Debug, Serialize)]
pub struct HorizonForecast {
    pub session_id: Uuid,
    pub base_date: NaiveDate,
    pub steps: usize,
    pub points: Vec<ForecastPoint>,
    /// Length of the session history, unchanged by the forecast
    pub history_len: usize,
}

impl ForecastService {
    pub fn new(forecaster: Arc<AqiForecaster>, sessions: SessionStore, config: ForecastConfig) -> Self {
        Self {
            forecaster,
            sessions,
            config,
        }
    }

    /// Predict tomorrow's AQI and append it to the session history
    pub async fn predict_next(
        &self,
        session_id: Uuid,
        readings: PollutantReadings,
        today: NaiveDate,
    ) -> AppResult<NextDayPrediction> {
        readings.validate()?;

        let forecaster = self.forecaster.clone();
        let (prediction, history) = self
            .sessions
            .update(session_id, move |session| {
                let prediction = forecaster.predict_next(&readings, &mut session.history)?;
                session.last_readings = Some(readings);
                Ok((prediction, session.history.as_slice().to_vec()))
            })
            .await?;

        tracing::info!(
            %session_id,
            prediction,
            history_len = history.len(),
            "next-day AQI predicted"
        );

        Ok(NextDayPrediction {
            session_id,
            date: today.checked_add_days(Days::new(1)).unwrap_or(today),
            prediction: AqiReading::new(prediction),
            history,
        })
    }

    /// Forecast `steps` days ahead on a copy of the session history
    pub async fn forecast_horizon(
        &self,
        session_id: Uuid,
        readings: PollutantReadings,
        steps: Option<usize>,
        today: NaiveDate,
    ) -> AppResult<HorizonForecast> {
        readings.validate()?;
        let steps = steps.unwrap_or(self.config.horizon_days);
        shared::validate_horizon(steps, self.config.max_horizon_days).map_err(|msg| {
            AppError::Validation {
                field: "steps".to_string(),
                message: msg.to_string(),
            }
        })?;

        let session = self.sessions.get(session_id).await?;
        let values = self
            .forecaster
            .forecast_horizon(&readings, &session.history, steps)?;

        tracing::info!(%session_id, steps, ?values, "horizon forecast computed");

        Ok(HorizonForecast {
            session_id,
            base_date: today,
            steps,
            points: dated_forecast(today, &values),
            history_len: session.history.len(),
        })
    }
}
