pub mod observation;
pub mod parameter;
pub mod station;

pub use observation::{ObservationValue, StationData, StationRef, TemperatureReading};
pub use parameter::{Parameter, ParameterCatalog};
pub use station::{Station, StationList};
