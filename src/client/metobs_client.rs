use crate::client::{ApiResponse, MetObsApi};
use crate::error::{Result, SmhiError};
use crate::settings::Settings;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// Blocking client for the SMHI meteorological observations API.
pub struct MetObsClient {
    client: Client,
    api_root: String,
    suffix: String,
}

impl MetObsClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::with_options(
            &settings.base_url,
            &settings.api_version,
            &settings.suffix,
            Duration::from_secs(settings.timeout_secs),
        )
    }

    pub fn with_options(
        base_url: &str,
        api_version: &str,
        suffix: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SmhiError::ClientBuild)?;

        Ok(Self {
            client,
            api_root: format!(
                "{}/api/version/{}",
                base_url.trim_end_matches('/'),
                api_version
            ),
            suffix: suffix.to_string(),
        })
    }

    /// Full URL for `path`: versioned root, then the path, then the suffix.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}{}", self.api_root, path, self.suffix)
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl MetObsApi for MetObsClient {
    fn request(&self, path: &str) -> Result<ApiResponse> {
        let url = self.url_for(path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| SmhiError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|source| SmhiError::Network {
            url: url.clone(),
            source,
        })?;

        debug!(%url, status, bytes = body.len(), "response");
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let client = MetObsClient::from_settings(&Settings::default()).unwrap();

        assert_eq!(
            client.url_for(""),
            "https://opendata-download-metobs.smhi.se/api/version/1.0.json"
        );
        assert_eq!(
            client.url_for("/parameter/2"),
            "https://opendata-download-metobs.smhi.se/api/version/1.0/parameter/2.json"
        );
    }

    #[test]
    fn test_custom_options() {
        let client = MetObsClient::with_options(
            "http://localhost:8080/",
            "latest",
            ".xml",
            Duration::from_secs(1),
        )
        .unwrap();

        assert_eq!(client.suffix(), ".xml");
        assert_eq!(
            client.url_for("/parameter/1"),
            "http://localhost:8080/api/version/latest/parameter/1.xml"
        );
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            base_url: "http://127.0.0.1:9".to_string(),
            ..Settings::default()
        };
        let client = MetObsClient::from_settings(&settings).unwrap();
        assert_eq!(
            client.url_for("/parameter/2"),
            "http://127.0.0.1:9/api/version/1.0/parameter/2.json"
        );
    }

    #[test]
    fn test_connection_refused_is_network_error() {
        // Port 9 (discard) is not expected to accept connections locally.
        let client = MetObsClient::with_options(
            "http://127.0.0.1:9",
            "1.0",
            ".json",
            Duration::from_secs(2),
        )
        .unwrap();

        assert!(matches!(
            client.request("/parameter/2"),
            Err(SmhiError::Network { .. })
        ));
    }
}
