//! Model feature vector and schema

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ForecastError, ForecastResult};
use crate::models::Pollutant;

pub const AQI_LAG1: &str = "AQI_lag1";
pub const AQI_ROLL3: &str = "AQI_roll3";

/// Column names in the order the model was trained on
pub const FEATURE_NAMES: [&str; 13] = [
    "PM2.5",
    "PM10",
    "NO",
    "NO2",
    "NOx",
    "NH3",
    "CO",
    "SO2",
    "O3",
    "Benzene",
    "Toluene",
    AQI_LAG1,
    AQI_ROLL3,
];

const LAG1_INDEX: usize = 11;
const ROLL3_INDEX: usize = 12;

/// One row of model input: named values in a fixed order
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    names: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Build a vector in the standard AQI layout
    pub(crate) fn from_parts(pollutants: [f64; 11], lag1: f64, roll3: f64) -> Self {
        let mut values = Vec::with_capacity(FEATURE_NAMES.len());
        values.extend_from_slice(&pollutants);
        values.push(lag1);
        values.push(roll3);
        Self {
            names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
            values,
        }
    }

    /// Build a vector from explicit (name, value) pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let (names, values) = pairs.into_iter().map(|(n, v)| (n.into(), v)).unzip();
        Self { names, values }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up a value by column name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    pub fn pollutant(&self, pollutant: Pollutant) -> Option<f64> {
        self.get(pollutant.feature_name())
    }

    pub fn lag1(&self) -> Option<f64> {
        self.get(AQI_LAG1)
    }

    pub fn roll3(&self) -> Option<f64> {
        self.get(AQI_ROLL3)
    }

    /// Overwrite the AQI-derived columns in place, leaving pollutants as-is
    pub(crate) fn set_history_features(&mut self, lag1: f64, roll3: f64) {
        self.values[LAG1_INDEX] = lag1;
        self.values[ROLL3_INDEX] = roll3;
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.names.iter().zip(&self.values) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Ordered list of column names a model accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check a vector's columns match this schema exactly, in order
    pub fn validate(&self, vector: &FeatureVector) -> ForecastResult<()> {
        if self.names.len() != vector.names.len() {
            return Err(ForecastError::FeatureCountMismatch {
                expected: self.names.len(),
                found: vector.names.len(),
            });
        }
        for (position, (expected, found)) in self.names.iter().zip(&vector.names).enumerate() {
            if expected != found {
                return Err(ForecastError::SchemaMismatch {
                    position,
                    expected: expected.clone(),
                    found: found.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self::new(FEATURE_NAMES)
    }
}
