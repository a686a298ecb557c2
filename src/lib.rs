pub mod cli;
pub mod client;
pub mod error;
pub mod logging;
pub mod models;
pub mod processors;
pub mod settings;
pub mod utils;
pub mod writers;

pub use client::{ApiResponse, MetObsApi, MetObsClient};
pub use error::{Result, SmhiError};
pub use processors::{calculate_high_low_temperature, AggregationReport, TemperatureAggregator};
pub use settings::Settings;
