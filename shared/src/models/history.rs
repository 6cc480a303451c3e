//! AQI history model

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, ForecastResult};

/// Number of entries the rolling-mean feature looks back over
pub const ROLLING_WINDOW: usize = 3;

/// Placeholder AQI used to seed a new session before any prediction exists
pub const SEED_AQI: f64 = 150.0;

/// Append-only sequence of AQI values for one session.
///
/// Always holds at least [`ROLLING_WINDOW`] values so the lag and rolling
/// features are defined. Only the forecaster appends to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct AqiHistory {
    values: Vec<f64>,
}

impl AqiHistory {
    /// Build a history from existing values
    pub fn new(values: Vec<f64>) -> ForecastResult<Self> {
        if values.len() < ROLLING_WINDOW {
            return Err(ForecastError::HistoryTooShort {
                required: ROLLING_WINDOW,
                actual: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(ForecastError::NonFiniteHistory(index));
        }
        Ok(Self { values })
    }

    /// History seeded with [`ROLLING_WINDOW`] copies of `seed`
    pub fn seeded_with(seed: f64) -> Self {
        Self {
            values: vec![seed; ROLLING_WINDOW],
        }
    }

    /// History seeded with the default placeholder AQI
    pub fn seeded() -> Self {
        Self::seeded_with(SEED_AQI)
    }

    /// Most recent AQI value
    pub fn lag1(&self) -> f64 {
        // len >= ROLLING_WINDOW is guaranteed by construction
        self.values[self.values.len() - 1]
    }

    /// Mean of the last [`ROLLING_WINDOW`] values
    pub fn roll3(&self) -> f64 {
        let tail = &self.values[self.values.len() - ROLLING_WINDOW..];
        tail.iter().sum::<f64>() / ROLLING_WINDOW as f64
    }

    pub(crate) fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl Default for AqiHistory {
    fn default() -> Self {
        Self::seeded()
    }
}

impl TryFrom<Vec<f64>> for AqiHistory {
    type Error = ForecastError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<AqiHistory> for Vec<f64> {
    fn from(history: AqiHistory) -> Self {
        history.values
    }
}
