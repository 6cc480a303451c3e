//! Domain models for the AQI forecast platform

mod aqi;
mod features;
mod history;
mod pollutant;

pub use aqi::*;
pub use features::*;
pub use history::*;
pub use pollutant::*;
