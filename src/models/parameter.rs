use serde::{Deserialize, Serialize};

use crate::error::{Result, SmhiError};

/// One measurement parameter from the API root catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub key: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub summary: String,
}

impl Parameter {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            summary: summary.into(),
        }
    }

    pub fn numeric_key(&self) -> Result<u32> {
        self.key
            .trim()
            .parse::<u32>()
            .map_err(|_| SmhiError::InvalidParameterKey(self.key.clone()))
    }
}

/// Body of the API root response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterCatalog {
    #[serde(default)]
    pub resource: Vec<Parameter>,
}

impl ParameterCatalog {
    /// Parameters ordered by their numeric key, ascending.
    pub fn sorted(&self) -> Result<Vec<(u32, &Parameter)>> {
        let mut keyed = self
            .resource
            .iter()
            .map(|p| p.numeric_key().map(|k| (k, p)))
            .collect::<Result<Vec<_>>>()?;

        keyed.sort_by_key(|(key, _)| *key);
        Ok(keyed)
    }
}
