use serde::{Deserialize, Serialize};

/// A station as listed under `/parameter/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub key: String,

    #[serde(default)]
    pub name: String,

    pub active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Station {
    pub fn new(key: impl Into<String>, name: impl Into<String>, active: bool) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            active,
            latitude: None,
            longitude: None,
            height: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Body of the `/parameter/{id}` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationList {
    #[serde(default)]
    pub station: Vec<Station>,
}

impl StationList {
    pub fn active(&self) -> impl Iterator<Item = &Station> {
        self.station.iter().filter(|s| s.is_active())
    }

    pub fn inactive_count(&self) -> usize {
        self.station.iter().filter(|s| !s.is_active()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_list_parsing() {
        let json = r#"{
            "key": "2",
            "title": "Lufttemperatur",
            "station": [
                {"key": "159880", "name": "Arvidsjaur A", "active": true,
                 "latitude": 65.5838, "longitude": 19.1758, "height": 379.3},
                {"key": "188790", "name": "Abisko", "active": false}
            ]
        }"#;

        let list: StationList = serde_json::from_str(json).unwrap();
        assert_eq!(list.station.len(), 2);
        assert_eq!(list.station[0].latitude, Some(65.5838));
        assert_eq!(list.active().count(), 1);
        assert_eq!(list.inactive_count(), 1);
    }

    #[test]
    fn test_missing_station_array() {
        let list: StationList = serde_json::from_str("{}").unwrap();
        assert!(list.station.is_empty());
        assert_eq!(list.active().count(), 0);
    }
}
