//! Shared types and forecasting core for the AQI forecast platform
//!
//! This crate contains the pure forecasting logic and the types shared
//! between the backend, the dashboard (via WASM), and tests.

pub mod error;
pub mod forecast;
pub mod models;
pub mod types;
pub mod validation;

pub use error::*;
pub use forecast::*;
pub use models::*;
pub use types::*;
pub use validation::*;
