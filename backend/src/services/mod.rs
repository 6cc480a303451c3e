//! Business logic services for the AQI forecast platform

pub mod forecast;
pub mod live;
pub mod report;
pub mod session;

pub use forecast::ForecastService;
pub use live::LiveDataService;
pub use report::ReportService;
pub use session::SessionStore;
