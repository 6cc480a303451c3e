//! HTTP handlers

pub mod forecast;
pub mod health;
pub mod live;
pub mod report;

pub use forecast::*;
pub use health::*;
pub use live::*;
pub use report::*;
