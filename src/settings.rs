use crate::error::Result;
use crate::utils::constants::{
    AIR_TEMPERATURE_PARAMETER, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_MAX_WORKERS,
    DEFAULT_SUFFIX, DEFAULT_TIMEOUT_SECS, MAX_WORKERS_LIMIT, PERIOD_LATEST_DAY,
};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// Environment variables with this prefix override file and default values,
/// e.g. `SMHI_TIMEOUT_SECS=10`.
pub const ENV_PREFIX: &str = "SMHI";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Settings {
    #[validate(url)]
    pub base_url: String,

    #[validate(length(min = 1))]
    pub api_version: String,

    pub suffix: String,

    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,

    pub parameter: u32,

    #[validate(length(min = 1))]
    pub period: String,

    #[validate(range(min = 1, max = 64))]
    pub max_workers: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            parameter: AIR_TEMPERATURE_PARAMETER,
            period: PERIOD_LATEST_DAY.to_string(),
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

impl Settings {
    /// Layer defaults, an optional TOML file and `SMHI_*` environment variables.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let defaults = Settings::default();

        let mut builder = Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("api_version", defaults.api_version)?
            .set_default("suffix", defaults.suffix)?
            .set_default("timeout_secs", defaults.timeout_secs as i64)?
            .set_default("parameter", defaults.parameter as i64)?
            .set_default("period", defaults.period)?
            .set_default("max_workers", defaults.max_workers as i64)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    pub fn with_parameter(mut self, parameter: Option<u32>) -> Self {
        if let Some(parameter) = parameter {
            self.parameter = parameter;
        }
        self
    }

    /// `Some(0)` means one worker per CPU.
    pub fn with_max_workers(mut self, max_workers: Option<usize>) -> Self {
        if let Some(workers) = max_workers {
            self.max_workers = if workers == 0 {
                num_cpus::get().min(MAX_WORKERS_LIMIT)
            } else {
                workers
            };
        }
        self
    }

    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.parameter, 2);
        assert_eq!(settings.period, "latest-day");
        assert_eq!(settings.suffix, ".json");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "timeout_secs = 5").unwrap();
        writeln!(file, "max_workers = 4").unwrap();
        writeln!(file, "parameter = 1").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.timeout_secs, 5);
        assert_eq!(settings.max_workers, 4);
        assert_eq!(settings.parameter, 1);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/smhi-metobs.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_and_validation() {
        let settings = Settings::default()
            .with_parameter(Some(1))
            .with_max_workers(Some(8));
        assert_eq!(settings.parameter, 1);
        assert_eq!(settings.max_workers, 8);
        assert!(settings.clone().validated().is_ok());

        let auto = Settings::default().with_max_workers(Some(0));
        assert!(auto.max_workers >= 1);

        let too_many = Settings::default().with_max_workers(Some(500));
        assert!(too_many.validated().is_err());

        let bad_url = Settings {
            base_url: "not a url".to_string(),
            ..Settings::default()
        };
        assert!(bad_url.validated().is_err());
    }
}
