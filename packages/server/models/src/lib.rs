#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the air quality server.
//!
//! These types are serialized to JSON for the REST API. Field names are
//! `snake_case` because the browser frontend reads them verbatim. They are
//! separate from the upstream wire types so the API contract can evolve
//! independently of the provider.

use air_quality_aqi_models::AqiReading;
use air_quality_pollutant_models::Components;
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /get-pollution`.
///
/// Both fields are kept as raw strings so that a missing or blank value
/// can be reported separately from a malformed one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PollutionQueryParams {
    /// Latitude.
    pub lat: Option<String>,
    /// Longitude.
    pub lon: Option<String>,
}

/// Full response of `GET /get-pollution`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiPollutionReport {
    /// The current reading.
    pub current: ApiCurrentReading,
    /// Up to three forecast readings (+24h, +48h, +72h).
    pub forecast: Vec<ApiForecastEntry>,
}

/// Current AQI with its raw concentrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCurrentReading {
    /// Aggregate AQI (0-500).
    pub aqi: u32,
    /// Category label (e.g. `"Moderate"`).
    pub label: String,
    /// Category color as `#RRGGBB`.
    pub color: String,
    /// Upstream concentrations, passed through unchanged.
    pub components: Components,
}

impl ApiCurrentReading {
    /// Builds the current reading from an assessed AQI and the
    /// concentrations it was computed from.
    #[must_use]
    pub fn new(reading: &AqiReading, components: Components) -> Self {
        Self {
            aqi: reading.aqi,
            label: reading.label().to_string(),
            color: reading.color().to_string(),
            components,
        }
    }
}

/// A forecast AQI at a fixed horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiForecastEntry {
    /// Unix timestamp of the forecast hour.
    pub dt: i64,
    /// Aggregate AQI (0-500).
    pub aqi: u32,
    /// Category label.
    pub aqi_label: String,
    /// Category color as `#RRGGBB`.
    pub aqi_color: String,
    /// Fixed main-pollutant tag.
    pub main_pollutant: String,
    /// Upstream concentrations, passed through unchanged.
    pub components: Components,
}

impl ApiForecastEntry {
    /// Builds a forecast entry for the hour at `dt`.
    #[must_use]
    pub fn new(
        dt: i64,
        reading: &AqiReading,
        main_pollutant: &str,
        components: Components,
    ) -> Self {
        Self {
            dt,
            aqi: reading.aqi,
            aqi_label: reading.label().to_string(),
            aqi_color: reading.color().to_string(),
            main_pollutant: main_pollutant.to_string(),
            components,
        }
    }
}

/// Error body returned with 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable message.
    pub error: String,
}

impl ApiError {
    /// Creates an error body carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use air_quality_aqi_models::{AqiCategory, SubIndexBreakdown};

    fn reading(aqi: u32) -> AqiReading {
        AqiReading {
            aqi,
            category: AqiCategory::from_aqi(aqi),
            breakdown: SubIndexBreakdown::default(),
        }
    }

    #[test]
    fn forecast_entry_uses_frontend_field_names() {
        let comps: Components = [("pm2_5", 61.0), ("o3", 20.5)].into_iter().collect();
        let entry = ApiForecastEntry::new(1_700_086_400, &reading(103), "PM2.5", comps);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dt": 1_700_086_400,
                "aqi": 103,
                "aqi_label": "Moderate",
                "aqi_color": "#FFFF00",
                "main_pollutant": "PM2.5",
                "components": {"o3": 20.5, "pm2_5": 61.0}
            })
        );
    }

    #[test]
    fn current_reading_shape() {
        let entry = ApiCurrentReading::new(&reading(350), Components::new());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "aqi": 350,
                "label": "Very Poor",
                "color": "#FF0000",
                "components": {}
            })
        );
    }
}
