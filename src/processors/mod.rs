pub mod parameter_catalog;
pub mod temperature_aggregator;

pub use parameter_catalog::ParameterLister;
pub use temperature_aggregator::{
    calculate_high_low_temperature, reduce_extremes, AggregationReport, Extremes, Outcome,
    SkipReason, SkippedStation, TemperatureAggregator,
};
