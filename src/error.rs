use thiserror::Error;

pub type Result<T> = std::result::Result<T, SmhiError>;

#[derive(Error, Debug)]
pub enum SmhiError {
    #[error("Network request failed for {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid reading '{value}' for station {station}")]
    InvalidValue {
        station: String,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Station {0} reported a value without a station name")]
    MissingStationName(String),

    #[error("Invalid parameter key: '{0}'")]
    InvalidParameterKey(String),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Worker pool error: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Logging setup error: {0}")]
    Logging(String),
}
