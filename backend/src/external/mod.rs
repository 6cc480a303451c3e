//! External integrations: live station data and the trained model

pub mod live_data;
pub mod model;

pub use live_data::LiveDataClient;
pub use model::{load_forecaster, AqiForecaster};
