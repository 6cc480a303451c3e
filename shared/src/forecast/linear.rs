//! Linear regression model loaded from a JSON artifact
//!
//! The artifact records the column order the model was trained with, so
//! the same file supplies both the weights and the validation schema:
//!
//! ```json
//! {
//!   "feature_names": ["PM2.5", "PM10", "...", "AQI_lag1", "AQI_roll3"],
//!   "coefficients": [0.41, 0.12, "...", 0.55, 0.20],
//!   "intercept": 3.7
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::Regressor;
use crate::error::{ForecastError, ForecastResult};
use crate::models::{FeatureSchema, FeatureVector};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    pub fn new(
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> ForecastResult<Self> {
        let model = Self {
            feature_names,
            coefficients,
            intercept,
        };
        model.check()?;
        Ok(model)
    }

    /// Parse and check a serialized artifact
    pub fn from_json(json: &str) -> ForecastResult<Self> {
        let model: Self = serde_json::from_str(json)
            .map_err(|e| ForecastError::InvalidArtifact(e.to_string()))?;
        model.check()?;
        Ok(model)
    }

    /// Column order the model was trained on
    pub fn schema(&self) -> FeatureSchema {
        FeatureSchema::new(self.feature_names.iter().cloned())
    }

    pub fn feature_count(&self) -> usize {
        self.feature_names.len()
    }

    fn check(&self) -> ForecastResult<()> {
        if self.feature_names.is_empty() {
            return Err(ForecastError::InvalidArtifact(
                "artifact lists no features".to_string(),
            ));
        }
        if self.feature_names.len() != self.coefficients.len() {
            return Err(ForecastError::InvalidArtifact(format!(
                "{} feature names but {} coefficients",
                self.feature_names.len(),
                self.coefficients.len()
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ForecastError::InvalidArtifact(
                "non-finite weight".to_string(),
            ));
        }
        Ok(())
    }
}

impl Regressor for LinearModel {
    fn predict(&self, features: &FeatureVector) -> ForecastResult<Vec<f64>> {
        if features.len() != self.coefficients.len() {
            return Err(ForecastError::FeatureCountMismatch {
                expected: self.coefficients.len(),
                found: features.len(),
            });
        }
        let y = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.values())
                .map(|(w, x)| w * x)
                .sum::<f64>();
        Ok(vec![y])
    }
}
