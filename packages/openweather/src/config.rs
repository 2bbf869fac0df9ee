//! Compile-time embedded provider configuration.
//!
//! The provider's endpoints and forecast horizons are defined in
//! `services/openweather.toml` and embedded at compile time. The API key
//! is never stored there; it comes from the environment.

use serde::Deserialize;

use crate::ConfigError;

/// Environment variable holding the `OpenWeatherMap` API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Environment variable overriding the embedded base URL.
pub const BASE_URL_ENV: &str = "OPENWEATHER_BASE_URL";

/// Air pollution provider configuration loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Unique identifier (e.g., `"openweather"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// API base URL without a trailing slash.
    pub base_url: String,
    /// Path of the current-conditions endpoint, relative to `base_url`.
    pub current_path: String,
    /// Path of the hourly forecast endpoint, relative to `base_url`.
    pub forecast_path: String,
    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Forecast sampling.
    pub forecast: ForecastConfig,
}

/// Which forecast entries to surface, and how to tag them.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    /// Indices into the hourly series. Offsets past the end of the series
    /// are skipped.
    pub offsets_hours: Vec<usize>,
    /// Fixed "main pollutant" tag attached to every forecast entry.
    pub main_pollutant: String,
}

const fn default_timeout_secs() -> u64 {
    30
}

const OPENWEATHER_TOML: &str = include_str!("../services/openweather.toml");

impl ProviderConfig {
    /// Returns the embedded `OpenWeatherMap` configuration.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed (this is a compile-time
    /// guarantee since the config is embedded).
    #[must_use]
    pub fn embedded() -> Self {
        toml::de::from_str(OPENWEATHER_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse embedded provider config: {e}"))
    }

    /// Returns the embedded configuration with environment overrides
    /// applied.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::embedded();
        if let Ok(url) = std::env::var(BASE_URL_ENV)
            && !url.trim().is_empty()
        {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }
        config
    }

    /// Builds the full URL for an endpoint path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

/// Reads the API key from [`API_KEY_ENV`].
///
/// # Errors
///
/// Returns [`ConfigError::MissingApiKey`] if the variable is unset or
/// blank.
pub fn api_key_from_env() -> Result<String, ConfigError> {
    std::env::var(API_KEY_ENV)
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .ok_or(ConfigError::MissingApiKey { var: API_KEY_ENV })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = ProviderConfig::embedded();
        assert_eq!(config.id, "openweather");
        assert!(!config.name.is_empty());
        assert!(config.base_url.starts_with("http"));
        assert_eq!(config.forecast.offsets_hours, vec![24, 48, 72]);
        assert_eq!(config.forecast.main_pollutant, "PM2.5");
        assert!(config.timeout_secs > 0);
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let mut config = ProviderConfig::embedded();
        config.base_url = "http://localhost:9000/".to_string();
        assert_eq!(
            config.endpoint(&config.current_path),
            "http://localhost:9000/air_pollution"
        );
        assert_eq!(
            config.endpoint(&config.forecast_path),
            "http://localhost:9000/air_pollution/forecast"
        );
    }
}
