/// SMHI meteorological observations API
pub const DEFAULT_BASE_URL: &str = "https://opendata-download-metobs.smhi.se";
pub const DEFAULT_API_VERSION: &str = "1.0";
pub const DEFAULT_SUFFIX: &str = ".json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Air temperature, the parameter the temperature summary is computed for
pub const AIR_TEMPERATURE_PARAMETER: u32 = 2;

/// Default period of the station data endpoint
pub const PERIOD_LATEST_DAY: &str = "latest-day";

/// Seeds printed when no station produced a reading
pub const SENTINEL_HIGHEST: f64 = -1000.0;
pub const SENTINEL_LOWEST: f64 = 1000.0;

/// Worker pool bounds
pub const DEFAULT_MAX_WORKERS: usize = 1;
pub const MAX_WORKERS_LIMIT: usize = 64;
