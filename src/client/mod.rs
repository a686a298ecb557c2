pub mod metobs_client;

pub use metobs_client::MetObsClient;

use crate::error::Result;
use serde::de::DeserializeOwned;

/// Status code and raw body of a single API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Anything that can answer a GET for a path below the versioned API root.
///
/// Implementations return non-success statuses as ordinary responses; only
/// transport failures are errors.
pub trait MetObsApi: Sync {
    fn request(&self, path: &str) -> Result<ApiResponse>;
}

impl<T: MetObsApi + ?Sized> MetObsApi for &T {
    fn request(&self, path: &str) -> Result<ApiResponse> {
        (**self).request(path)
    }
}

/// Path of the station list for a parameter.
pub fn parameter_path(parameter: u32) -> String {
    format!("/parameter/{}", parameter)
}

/// Path of one station's readings over a named period.
pub fn station_data_path(parameter: u32, station_key: &str, period: &str) -> String {
    format!(
        "{}/station/{}/period/{}/data",
        parameter_path(parameter),
        station_key,
        period
    )
}
