//! Recursive AQI forecasting
//!
//! A single-step regressor predicts tomorrow's AQI from today's pollutant
//! readings plus two AQI-history features. Multi-day horizons are produced
//! by feeding each prediction back into the history and predicting again,
//! with the pollutant readings held fixed.

mod assembler;
mod linear;

pub use assembler::assemble_features;
pub use linear::LinearModel;

use crate::error::{ForecastError, ForecastResult};
use crate::models::{AqiHistory, FeatureSchema, FeatureVector, PollutantReadings};

/// A pre-trained single-step model.
///
/// Implementations are treated as opaque and stateless; the caller takes
/// the first element of the returned output.
pub trait Regressor {
    fn predict(&self, features: &FeatureVector) -> ForecastResult<Vec<f64>>;
}

impl<R: Regressor + ?Sized> Regressor for &R {
    fn predict(&self, features: &FeatureVector) -> ForecastResult<Vec<f64>> {
        (**self).predict(features)
    }
}

impl<R: Regressor + ?Sized> Regressor for Box<R> {
    fn predict(&self, features: &FeatureVector) -> ForecastResult<Vec<f64>> {
        (**self).predict(features)
    }
}

/// Drives a [`Regressor`] over an AQI history
#[derive(Debug, Clone)]
pub struct Forecaster<M> {
    model: M,
    schema: FeatureSchema,
}

impl<M: Regressor> Forecaster<M> {
    /// Create a forecaster that validates every input row against `schema`
    pub fn new(model: M, schema: FeatureSchema) -> Self {
        Self { model, schema }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Predict the next AQI and append it to `history`.
    ///
    /// `history` is only modified when the prediction succeeds.
    pub fn predict_next(
        &self,
        pollutants: &PollutantReadings,
        history: &mut AqiHistory,
    ) -> ForecastResult<f64> {
        let features = assemble_features(pollutants, history);
        let prediction = self.predict_row(&features)?;
        history.push(prediction);
        Ok(prediction)
    }

    /// Predict `steps` days ahead without touching the caller's history.
    ///
    /// Index 0 of the result is one step ahead.
    pub fn forecast_horizon(
        &self,
        pollutants: &PollutantReadings,
        history: &AqiHistory,
        steps: usize,
    ) -> ForecastResult<Vec<f64>> {
        let mut working = history.clone();
        let mut features = assemble_features(pollutants, &working);
        let mut forecast = Vec::with_capacity(steps);

        for _ in 0..steps {
            features.set_history_features(working.lag1(), working.roll3());
            let prediction = self.predict_row(&features)?;
            working.push(prediction);
            forecast.push(prediction);
        }

        Ok(forecast)
    }

    /// A non-finite output is an error so it never reaches a history
    fn predict_row(&self, features: &FeatureVector) -> ForecastResult<f64> {
        self.schema.validate(features)?;
        let prediction = self
            .model
            .predict(features)?
            .first()
            .copied()
            .ok_or(ForecastError::EmptyPrediction)?;
        if !prediction.is_finite() {
            return Err(ForecastError::Inference(format!(
                "model returned non-finite value {}",
                prediction
            )));
        }
        Ok(prediction)
    }
}
