use crate::client::MetObsApi;
use crate::error::Result;
use crate::models::{Parameter, ParameterCatalog};
use crate::writers::TableWriter;
use tracing::{info, warn};

/// Fetches the root catalog of measurement parameters.
pub struct ParameterLister;

impl ParameterLister {
    pub fn new() -> Self {
        Self
    }

    /// Parameters sorted by numeric key, or `None` when the catalog request
    /// did not succeed.
    pub fn fetch<A: MetObsApi>(&self, api: &A) -> Result<Option<Vec<Parameter>>> {
        let response = api.request("")?;
        if !response.is_success() {
            warn!(status = response.status, "parameter catalog request failed");
            return Ok(None);
        }

        let catalog: ParameterCatalog = response.json()?;
        let sorted: Vec<Parameter> = catalog
            .sorted()?
            .into_iter()
            .map(|(_, parameter)| parameter.clone())
            .collect();

        info!(parameters = sorted.len(), "fetched parameter catalog");
        Ok(Some(sorted))
    }

    pub fn table(&self, parameters: &[Parameter]) -> TableWriter {
        let mut table = TableWriter::new();
        for p in parameters {
            table.push_row([p.key.trim(), p.title.as_str(), p.summary.as_str()]);
        }
        table
    }
}

impl Default for ParameterLister {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiResponse;
    use std::sync::Mutex;

    struct CannedApi {
        response: ApiResponse,
        paths: Mutex<Vec<String>>,
    }

    impl MetObsApi for CannedApi {
        fn request(&self, path: &str) -> Result<ApiResponse> {
            self.paths.lock().unwrap().push(path.to_string());
            Ok(self.response.clone())
        }
    }

    fn canned(status: u16, body: &str) -> CannedApi {
        CannedApi {
            response: ApiResponse::new(status, body),
            paths: Mutex::new(Vec::new()),
        }
    }

    #[test]
    fn test_fetch_sorts_numerically() {
        let api = canned(
            200,
            r#"{"resource": [
                {"key": "21", "title": "Byvind", "summary": "max, 1 gång/tim"},
                {"key": "3", "title": "Vindriktning", "summary": "medelvärde 10 min"},
                {"key": "1", "title": "Lufttemperatur", "summary": "momentanvärde, 1 gång/tim"}
            ]}"#,
        );

        let parameters = ParameterLister::new().fetch(&api).unwrap().unwrap();
        let keys: Vec<&str> = parameters.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "3", "21"]);

        assert_eq!(*api.paths.lock().unwrap(), vec![String::new()]);
    }

    #[test]
    fn test_failed_catalog_request() {
        let api = canned(500, "");
        assert!(ParameterLister::new().fetch(&api).unwrap().is_none());
    }

    #[test]
    fn test_table_rows() {
        let lister = ParameterLister::new();
        let table = lister.table(&[
            Parameter::new("1", "Lufttemperatur", "momentanvärde, 1 gång/tim"),
            Parameter::new("2", "Lufttemperatur", "medelvärde 1 dygn, 1 gång/dygn, kl 00"),
        ]);

        assert_eq!(table.len(), 2);
        assert!(table.render().lines().all(|line| !line.starts_with("key")));
    }
}
