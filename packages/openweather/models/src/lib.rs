#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Wire types for the `OpenWeatherMap` Air Pollution API.
//!
//! Both `/air_pollution` (current) and `/air_pollution/forecast` return the
//! same envelope: a coordinate and a `list` of hourly entries. The current
//! endpoint returns a single entry; the forecast endpoint returns roughly
//! 96 hourly entries starting at the current hour.
//!
//! See <https://openweathermap.org/api/air-pollution>

use air_quality_pollutant_models::Components;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Response envelope shared by the current and forecast endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirPollutionResponse {
    /// Coordinate the provider resolved the request to.
    #[serde(default)]
    pub coord: Option<Coordinate>,
    /// Hourly entries, oldest first.
    pub list: Vec<AirPollutionEntry>,
}

impl AirPollutionResponse {
    /// The first (for the current endpoint, the only) entry.
    #[must_use]
    pub fn first(&self) -> Option<&AirPollutionEntry> {
        self.list.first()
    }
}

/// One hourly sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirPollutionEntry {
    /// Unix timestamp (seconds, UTC).
    pub dt: i64,
    /// Provider's own 1–5 index. Not used for the CPCB calculation.
    #[serde(default)]
    pub main: Option<ProviderIndex>,
    /// Raw concentrations in µg/m³.
    pub components: Components,
}

impl AirPollutionEntry {
    /// `dt` as a UTC timestamp, if it is in range.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }
}

/// The provider's `main` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderIndex {
    /// `OpenWeatherMap`'s own 1–5 index. Not used for the CPCB scale.
    pub aqi: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_current_response() {
        let body = serde_json::json!({
            "coord": {"lon": 77.209, "lat": 28.6139},
            "list": [{
                "main": {"aqi": 5},
                "components": {
                    "co": 1869.2, "no": 12.52, "no2": 50.73, "o3": 3.09,
                    "so2": 20.27, "pm2_5": 178.09, "pm10": 230.56, "nh3": 18.49
                },
                "dt": 1_700_000_000
            }]
        });
        let resp: AirPollutionResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.coord, Some(Coordinate::new(28.6139, 77.209)));
        let entry = resp.first().unwrap();
        assert_eq!(entry.main, Some(ProviderIndex { aqi: 5 }));
        assert_eq!(entry.components.get("nh3"), Some(18.49));
        assert_eq!(
            entry.timestamp().unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );
    }

    #[test]
    fn tolerates_missing_optional_blocks() {
        let body = serde_json::json!({
            "list": [{"dt": 0, "components": {}}]
        });
        let resp: AirPollutionResponse = serde_json::from_value(body).unwrap();
        assert!(resp.coord.is_none());
        assert!(resp.list[0].main.is_none());
        assert!(resp.list[0].components.is_empty());
    }

    #[test]
    fn rejects_missing_list() {
        let body = serde_json::json!({"cod": 401, "message": "Invalid API key"});
        assert!(serde_json::from_value::<AirPollutionResponse>(body).is_err());
    }
}
