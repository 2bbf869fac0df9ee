#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Client for the `OpenWeatherMap` Air Pollution API.
//!
//! Fetches the current reading and the hourly forecast for a coordinate.
//! Callers depend on the [`AirPollutionProvider`] trait rather than the
//! concrete [`OpenWeatherClient`], so tests can substitute canned data.
//!
//! Requests are sent once. There is no retry, caching, or rate limiting;
//! any failure is returned to the caller as a [`FetchError`].

pub mod config;

use std::time::Duration;

use air_quality_openweather_models::{AirPollutionEntry, AirPollutionResponse, Coordinate};
use async_trait::async_trait;
use thiserror::Error;

pub use config::{ForecastConfig, ProviderConfig};

/// Maximum length of the response body preview kept in errors.
const BODY_PREVIEW_LEN: usize = 200;

/// Errors from fetching upstream air pollution data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed or the body could not be decoded.
    ///
    /// The request URL is stripped before the error is stored because its
    /// query string carries the API key.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Provider returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Start of the response body.
        body: String,
    },

    /// The response contained no entries.
    #[error("Provider returned an empty list")]
    EmptyList,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.without_url())
    }
}

/// Errors from building a client.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API key was configured.
    #[error("API key not configured (set {var})")]
    MissingApiKey {
        /// Environment variable that should hold the key.
        var: &'static str,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// A source of current and forecast air pollution data.
#[async_trait]
pub trait AirPollutionProvider: Send + Sync {
    /// Fetches the current reading for `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails or the response cannot
    /// be decoded.
    async fn current(&self, coord: Coordinate) -> Result<AirPollutionResponse, FetchError>;

    /// Fetches the hourly forecast series for `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails or the response cannot
    /// be decoded.
    async fn forecast(&self, coord: Coordinate) -> Result<AirPollutionResponse, FetchError>;
}

/// `reqwest`-backed [`AirPollutionProvider`] for `OpenWeatherMap`.
pub struct OpenWeatherClient {
    client: reqwest::Client,
    config: ProviderConfig,
    api_key: String,
}

impl OpenWeatherClient {
    /// Creates a client for `config` authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if `api_key` is blank, or
    /// [`ConfigError::Client`] if the HTTP client cannot be built.
    pub fn new(config: ProviderConfig, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey {
                var: config::API_KEY_ENV,
            });
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Creates a client from the embedded configuration and the
    /// environment (`OPENWEATHER_API_KEY`, optional `OPENWEATHER_BASE_URL`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the API key is missing or the HTTP client
    /// cannot be built.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = config::api_key_from_env()?;
        Self::new(ProviderConfig::from_env(), api_key)
    }

    /// The configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn get(&self, path: &str, coord: Coordinate) -> Result<AirPollutionResponse, FetchError> {
        let url = self.config.endpoint(path);
        log::debug!("GET {url} for {coord}");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("lat", coord.lat.to_string()),
                ("lon", coord.lon.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: body.chars().take(BODY_PREVIEW_LEN).collect(),
            });
        }

        Ok(resp.json().await?)
    }
}

#[async_trait]
impl AirPollutionProvider for OpenWeatherClient {
    async fn current(&self, coord: Coordinate) -> Result<AirPollutionResponse, FetchError> {
        self.get(&self.config.current_path, coord).await
    }

    async fn forecast(&self, coord: Coordinate) -> Result<AirPollutionResponse, FetchError> {
        self.get(&self.config.forecast_path, coord).await
    }
}

/// Returns the first entry of a response.
///
/// # Errors
///
/// Returns [`FetchError::EmptyList`] if the response has no entries.
pub fn first_entry(resp: &AirPollutionResponse) -> Result<&AirPollutionEntry, FetchError> {
    resp.first().ok_or(FetchError::EmptyList)
}

/// Picks the forecast entries at `offsets` (indices into the hourly
/// series), in the order given.
///
/// Offsets at or beyond the end of the series are skipped rather than
/// treated as errors, so a short series yields fewer entries.
#[must_use]
pub fn select_forecast<'a>(
    entries: &'a [AirPollutionEntry],
    offsets: &[usize],
) -> Vec<&'a AirPollutionEntry> {
    offsets
        .iter()
        .filter_map(|&offset| {
            let entry = entries.get(offset);
            if entry.is_none() {
                log::debug!(
                    "Forecast offset {offset}h is beyond the {}-entry series; skipping",
                    entries.len()
                );
            }
            entry
        })
        .collect()
}
