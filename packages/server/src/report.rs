//! Assembles the pollution report from upstream data.

use air_quality_openweather::{AirPollutionProvider, FetchError, ForecastConfig};
use air_quality_openweather_models::Coordinate;
use air_quality_server_models::{ApiCurrentReading, ApiForecastEntry, ApiPollutionReport};

/// Fetches current and forecast data for `coord` and converts each
/// selected entry into an AQI reading.
///
/// Both upstream requests are issued concurrently. Forecast horizons that
/// fall past the end of the series are omitted from the report.
///
/// # Errors
///
/// Returns [`FetchError`] if either request fails, either body cannot be
/// decoded, or the current response has no entries.
pub async fn build_report(
    provider: &dyn AirPollutionProvider,
    forecast_config: &ForecastConfig,
    coord: Coordinate,
) -> Result<ApiPollutionReport, FetchError> {
    let (current_resp, forecast_resp) =
        futures::future::try_join(provider.current(coord), provider.forecast(coord)).await?;

    let current_entry = air_quality_openweather::first_entry(&current_resp)?;
    let current_reading = air_quality_aqi::assess(&current_entry.components);
    log::info!(
        "Current AQI at {coord}: {} ({})",
        current_reading.aqi,
        current_reading.label()
    );
    let current = ApiCurrentReading::new(&current_reading, current_entry.components.clone());

    let forecast = air_quality_openweather::select_forecast(
        &forecast_resp.list,
        &forecast_config.offsets_hours,
    )
    .into_iter()
    .map(|entry| {
        let reading = air_quality_aqi::assess(&entry.components);
        log::debug!(
            "Forecast AQI at {coord} for {}: {} ({})",
            entry
                .timestamp()
                .map_or_else(|| entry.dt.to_string(), |t| t.to_rfc3339()),
            reading.aqi,
            reading.label()
        );
        ApiForecastEntry::new(
            entry.dt,
            &reading,
            &forecast_config.main_pollutant,
            entry.components.clone(),
        )
    })
    .collect();

    Ok(ApiPollutionReport { current, forecast })
}
