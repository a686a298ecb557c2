use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SmhiError};

/// One entry of the `value` array in a station data response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationValue {
    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub date: Option<i64>,

    pub value: String,

    #[serde(default)]
    pub quality: Option<String>,
}

impl ObservationValue {
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        self.date
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationRef {
    #[serde(default)]
    pub key: Option<String>,

    pub name: String,
}

/// Body of `/parameter/{id}/station/{key}/period/{period}/data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationData {
    #[serde(default)]
    pub value: Option<Vec<ObservationValue>>,

    /// Only required once a value is present.
    #[serde(default)]
    pub station: Option<StationRef>,
}

impl StationData {
    pub fn first_value(&self) -> Option<&ObservationValue> {
        self.value.as_ref().and_then(|values| values.first())
    }

    /// Turn the first reported value into a reading. `Ok(None)` when the
    /// station reported nothing for the period.
    pub fn latest_reading(&self, station_key: &str) -> Result<Option<TemperatureReading>> {
        let Some(first) = self.first_value() else {
            return Ok(None);
        };

        let value = first
            .value
            .trim()
            .parse::<f64>()
            .map_err(|source| SmhiError::InvalidValue {
                station: station_key.to_string(),
                value: first.value.clone(),
                source,
            })?;

        let station = self
            .station
            .as_ref()
            .ok_or_else(|| SmhiError::MissingStationName(station_key.to_string()))?;

        Ok(Some(TemperatureReading {
            station_key: station_key.to_string(),
            station_name: station.name.clone(),
            value,
            observed_at: first.observed_at(),
            quality: first.quality.clone(),
        }))
    }
}

/// A single station's latest temperature, in degrees Celsius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    pub station_key: String,
    pub station_name: String,
    pub value: f64,
    pub observed_at: Option<DateTime<Utc>>,
    pub quality: Option<String>,
}

impl TemperatureReading {
    pub fn new(
        station_key: impl Into<String>,
        station_name: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            station_key: station_key.into(),
            station_name: station_name.into(),
            value,
            observed_at: None,
            quality: None,
        }
    }
}
