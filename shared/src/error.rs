//! Errors raised by the forecasting core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("AQI history needs at least {required} values, got {actual}")]
    HistoryTooShort { required: usize, actual: usize },

    #[error("AQI history contains a non-finite value at index {0}")]
    NonFiniteHistory(usize),

    #[error("Feature count mismatch: model expects {expected}, vector has {found}")]
    FeatureCountMismatch { expected: usize, found: usize },

    #[error("Feature mismatch at position {position}: model expects '{expected}', vector has '{found}'")]
    SchemaMismatch {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("Model returned no output")]
    EmptyPrediction,

    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("Model inference failed: {0}")]
    Inference(String),
}

pub type ForecastResult<T> = Result<T, ForecastError>;
