use crate::client::{parameter_path, station_data_path, MetObsApi};
use crate::error::Result;
use crate::models::{Station, StationData, StationList, TemperatureReading};
use crate::settings::Settings;
use crate::utils::constants::{
    AIR_TEMPERATURE_PARAMETER, PERIOD_LATEST_DAY, SENTINEL_HIGHEST, SENTINEL_LOWEST,
};
use crate::utils::progress::ProgressReporter;
use rayon::prelude::*;
use std::fmt;
use tracing::{debug, info, warn};

/// Warmest and coldest reading seen so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremes {
    pub highest: TemperatureReading,
    pub lowest: TemperatureReading,
}

impl Extremes {
    pub fn new(first: &TemperatureReading) -> Self {
        Self {
            highest: first.clone(),
            lowest: first.clone(),
        }
    }

    /// Only strictly warmer/colder readings replace the current extreme, so
    /// the first station seen keeps a tie.
    pub fn observe(&mut self, reading: &TemperatureReading) {
        if reading.value > self.highest.value {
            self.highest = reading.clone();
        }
        if reading.value < self.lowest.value {
            self.lowest = reading.clone();
        }
    }
}

/// Fold readings in order into their extremes; `None` for no readings.
/// NaN readings never become an extreme.
pub fn reduce_extremes<'a, I>(readings: I) -> Option<Extremes>
where
    I: IntoIterator<Item = &'a TemperatureReading>,
{
    readings
        .into_iter()
        .filter(|reading| !reading.value.is_nan())
        .fold(None, |acc: Option<Extremes>, reading| match acc {
            None => Some(Extremes::new(reading)),
            Some(mut extremes) => {
                extremes.observe(reading);
                Some(extremes)
            }
        })
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    RequestFailed { status: u16 },
    NoValues,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::RequestFailed { status } => {
                write!(f, "request failed with status {}", status)
            }
            SkipReason::NoValues => write!(f, "no values reported"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedStation {
    pub key: String,
    pub name: String,
    pub reason: SkipReason,
}

/// Why a report does or does not carry extremes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Complete,
    StationListUnavailable { status: u16 },
    NoActiveStations,
    NoReadings,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Complete => write!(f, "complete"),
            Outcome::StationListUnavailable { status } => {
                write!(f, "station list unavailable (status {})", status)
            }
            Outcome::NoActiveStations => write!(f, "no active stations"),
            Outcome::NoReadings => write!(f, "no active station reported a value"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AggregationReport {
    pub parameter: u32,
    pub station_list_status: u16,
    pub active_stations: usize,
    pub inactive_stations: usize,
    pub readings: Vec<TemperatureReading>,
    pub skipped: Vec<SkippedStation>,
    pub extremes: Option<Extremes>,
}

impl AggregationReport {
    fn unavailable(parameter: u32, status: u16) -> Self {
        Self {
            parameter,
            station_list_status: status,
            active_stations: 0,
            inactive_stations: 0,
            readings: Vec::new(),
            skipped: Vec::new(),
            extremes: None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        if !(200..300).contains(&self.station_list_status) {
            Outcome::StationListUnavailable {
                status: self.station_list_status,
            }
        } else if self.active_stations == 0 {
            Outcome::NoActiveStations
        } else if self.extremes.is_none() {
            Outcome::NoReadings
        } else {
            Outcome::Complete
        }
    }

    pub fn has_data(&self) -> bool {
        self.extremes.is_some()
    }

    pub fn highest(&self) -> Option<&TemperatureReading> {
        self.extremes.as_ref().map(|e| &e.highest)
    }

    pub fn lowest(&self) -> Option<&TemperatureReading> {
        self.extremes.as_ref().map(|e| &e.lowest)
    }

    /// `(highest_name, highest_value, lowest_name, lowest_value)`, with empty
    /// names and -1000/1000 when nothing was read.
    pub fn as_tuple(&self) -> (String, f64, String, f64) {
        match &self.extremes {
            Some(e) => (
                e.highest.station_name.clone(),
                e.highest.value,
                e.lowest.station_name.clone(),
                e.lowest.value,
            ),
            None => (String::new(), SENTINEL_HIGHEST, String::new(), SENTINEL_LOWEST),
        }
    }
}

enum StationFetch {
    Reading(TemperatureReading),
    Skipped(SkippedStation),
}

pub struct TemperatureAggregator {
    parameter: u32,
    period: String,
    max_workers: usize,
}

impl TemperatureAggregator {
    pub fn new(parameter: u32) -> Self {
        Self {
            parameter,
            period: PERIOD_LATEST_DAY.to_string(),
            max_workers: 1,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.parameter)
            .with_period(&settings.period)
            .with_max_workers(settings.max_workers)
    }

    pub fn with_period(mut self, period: &str) -> Self {
        self.period = period.to_string();
        self
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers.max(1);
        self
    }

    /// Fetch the station list, then the latest reading of every active
    /// station, and reduce to the extremes.
    pub fn aggregate<A: MetObsApi>(
        &self,
        api: &A,
        progress: Option<&ProgressReporter>,
    ) -> Result<AggregationReport> {
        let response = api.request(&parameter_path(self.parameter))?;
        if !response.is_success() {
            warn!(
                parameter = self.parameter,
                status = response.status,
                "station list request failed"
            );
            return Ok(AggregationReport::unavailable(self.parameter, response.status));
        }

        let list: StationList = response.json()?;
        let active: Vec<&Station> = list.active().collect();
        let inactive_stations = list.inactive_count();
        info!(
            parameter = self.parameter,
            active = active.len(),
            inactive = inactive_stations,
            "fetched station list"
        );

        if let Some(p) = progress {
            p.set_length(active.len() as u64);
            p.set_message("Fetching station readings");
        }

        let fetched = self.fetch_all(api, &active, progress)?;

        let mut readings = Vec::new();
        let mut skipped = Vec::new();
        for fetch in fetched {
            match fetch {
                StationFetch::Reading(reading) => readings.push(reading),
                StationFetch::Skipped(station) => skipped.push(station),
            }
        }

        // Readings are in station-list order regardless of worker count.
        let extremes = reduce_extremes(&readings);

        if let Some(p) = progress {
            p.finish_and_clear();
        }

        info!(
            readings = readings.len(),
            skipped = skipped.len(),
            "aggregated temperatures"
        );

        Ok(AggregationReport {
            parameter: self.parameter,
            station_list_status: response.status,
            active_stations: active.len(),
            inactive_stations,
            readings,
            skipped,
            extremes,
        })
    }

    fn fetch_all<A: MetObsApi>(
        &self,
        api: &A,
        stations: &[&Station],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<StationFetch>> {
        let fetch = |station: &&Station| {
            let result = self.fetch_station(api, station);
            if let Some(p) = progress {
                p.increment(1);
            }
            result
        };

        if self.max_workers <= 1 {
            return stations.iter().map(fetch).collect();
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()?;

        // Indexed parallel collect keeps the input order.
        pool.install(|| stations.par_iter().map(fetch).collect())
    }

    fn fetch_station<A: MetObsApi>(&self, api: &A, station: &Station) -> Result<StationFetch> {
        let path = station_data_path(self.parameter, &station.key, &self.period);
        let response = api.request(&path)?;

        if !response.is_success() {
            debug!(station = %station.key, status = response.status, "skipping station");
            return Ok(StationFetch::Skipped(SkippedStation {
                key: station.key.clone(),
                name: station.name.clone(),
                reason: SkipReason::RequestFailed {
                    status: response.status,
                },
            }));
        }

        let data: StationData = response.json()?;
        match data.latest_reading(&station.key)? {
            Some(reading) => Ok(StationFetch::Reading(reading)),
            None => {
                debug!(station = %station.key, "no values, skipping station");
                Ok(StationFetch::Skipped(SkippedStation {
                    key: station.key.clone(),
                    name: station.name.clone(),
                    reason: SkipReason::NoValues,
                }))
            }
        }
    }
}

impl Default for TemperatureAggregator {
    fn default() -> Self {
        Self::new(AIR_TEMPERATURE_PARAMETER)
    }
}

/// Highest and lowest air temperature across active stations, as
/// `(highest_name, highest_value, lowest_name, lowest_value)`.
pub fn calculate_high_low_temperature<A: MetObsApi>(
    api: &A,
) -> Result<(String, f64, String, f64)> {
    let report = TemperatureAggregator::default().aggregate(api, None)?;
    Ok(report.as_tuple())
}
