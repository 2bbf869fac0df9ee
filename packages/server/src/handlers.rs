//! HTTP handler functions for the air quality API.

use actix_web::{HttpResponse, web};
use air_quality_openweather_models::Coordinate;
use air_quality_server_models::{ApiError, ApiHealth, PollutionQueryParams};

use crate::{AppState, report};

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /get-pollution?lat=..&lon=..`
///
/// Returns the current AQI and up to three daily forecast points for the
/// coordinate.
pub async fn get_pollution(
    state: web::Data<AppState>,
    params: web::Query<PollutionQueryParams>,
) -> HttpResponse {
    let coord = match parse_coordinate(&params) {
        Ok(coord) => coord,
        Err(message) => return HttpResponse::BadRequest().json(ApiError::new(message)),
    };

    match report::build_report(state.provider.as_ref(), &state.forecast, coord).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => {
            log::error!("Failed to fetch pollution data for {coord}: {e}");
            HttpResponse::InternalServerError().json(ApiError::new("Failed to fetch data"))
        }
    }
}

/// Parses the `lat`/`lon` query parameters into a [`Coordinate`].
fn parse_coordinate(params: &PollutionQueryParams) -> Result<Coordinate, &'static str> {
    let non_blank: for<'a> fn(Option<&'a str>) -> Option<&'a str> =
        |v| v.map(str::trim).filter(|s| !s.is_empty());

    let (Some(lat), Some(lon)) = (
        non_blank(params.lat.as_deref()),
        non_blank(params.lon.as_deref()),
    ) else {
        return Err("Missing lat/lon");
    };

    match (lat.parse::<f64>(), lon.parse::<f64>()) {
        (Ok(lat), Ok(lon)) if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) => {
            Ok(Coordinate::new(lat, lon))
        }
        _ => Err("Invalid lat/lon"),
    }
}

#[cfg(test)]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use air_quality_openweather::{AirPollutionProvider, FetchError, ForecastConfig};
    use air_quality_openweather_models::{AirPollutionEntry, AirPollutionResponse};
    use air_quality_pollutant_models::Components;
    use async_trait::async_trait;

    use super::*;

    const T0: i64 = 1_700_000_000;

    /// Serves a fixed current reading and an hourly forecast series.
    struct FakeProvider {
        forecast_len: usize,
        fail: bool,
        calls: AtomicUsize,
    }

    impl FakeProvider {
        fn new(forecast_len: usize) -> Self {
            Self {
                forecast_len,
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new(0)
            }
        }
    }

    fn entry(dt: i64, pairs: &[(&str, f64)]) -> AirPollutionEntry {
        AirPollutionEntry {
            dt,
            main: None,
            components: pairs.iter().map(|(k, v)| (*k, *v)).collect::<Components>(),
        }
    }

    #[async_trait]
    impl AirPollutionProvider for FakeProvider {
        async fn current(&self, _coord: Coordinate) -> Result<AirPollutionResponse, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(FetchError::Status {
                    status: 401,
                    body: "Invalid API key".to_string(),
                });
            }
            Ok(AirPollutionResponse {
                coord: None,
                list: vec![entry(T0, &[("pm2_5", 60.0), ("o3", 12.5), ("nh3", 0.4)])],
            })
        }

        async fn forecast(&self, _coord: Coordinate) -> Result<AirPollutionResponse, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(FetchError::EmptyList);
            }
            let list = (0..self.forecast_len)
                .map(|h: usize| {
                    // pm10 rises 2 µg/m³ per hour.
                    entry(T0 + h as i64 * 3600, &[("pm10", 2.0 * h as f64)])
                })
                .collect();
            Ok(AirPollutionResponse { coord: None, list })
        }
    }

    fn state(provider: Arc<dyn AirPollutionProvider>) -> web::Data<AppState> {
        web::Data::new(AppState {
            provider,
            forecast: ForecastConfig {
                offsets_hours: vec![24, 48, 72],
                main_pollutant: "PM2.5".to_string(),
            },
        })
    }

    #[actix_web::test]
    async fn reports_current_and_three_forecasts() {
        let app = test::init_service(
            App::new()
                .app_data(state(Arc::new(FakeProvider::new(96))))
                .configure(crate::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/get-pollution?lat=28.61&lon=77.20")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["current"]["aqi"], 100);
        assert_eq!(body["current"]["label"], "Satisfactory");
        assert_eq!(body["current"]["color"], "#92D050");
        assert_eq!(body["current"]["components"]["o3"], 12.5);
        assert_eq!(body["current"]["components"]["nh3"], 0.4);

        let forecast = body["forecast"].as_array().unwrap();
        assert_eq!(forecast.len(), 3);
        // pm10 48 -> 48, 96 -> 96.08, 144 -> 130.04
        let aqis: Vec<u64> = forecast.iter().map(|f| f["aqi"].as_u64().unwrap()).collect();
        assert_eq!(aqis, vec![48, 96, 130]);
        assert_eq!(forecast[0]["dt"], T0 + 24 * 3600);
        assert_eq!(forecast[2]["aqi_label"], "Moderate");
        assert_eq!(forecast[2]["aqi_color"], "#FFFF00");
        assert_eq!(forecast[1]["main_pollutant"], "PM2.5");
        assert_eq!(forecast[1]["components"]["pm10"], 96.0);
    }

    #[actix_web::test]
    async fn short_forecast_series_is_truncated() {
        let app = test::init_service(
            App::new()
                .app_data(state(Arc::new(FakeProvider::new(60))))
                .configure(crate::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/get-pollution?lat=1&lon=2")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["forecast"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn missing_coordinates_are_rejected_without_fetching() {
        let provider = Arc::new(FakeProvider::new(96));
        let app = test::init_service(
            App::new()
                .app_data(state(provider.clone()))
                .configure(crate::configure),
        )
        .await;

        for uri in [
            "/get-pollution",
            "/get-pollution?lat=10",
            "/get-pollution?lon=10",
            "/get-pollution?lat=&lon=5",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Missing lat/lon", "{uri}");
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn malformed_coordinates_are_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(state(Arc::new(FakeProvider::new(96))))
                .configure(crate::configure),
        )
        .await;

        for uri in [
            "/get-pollution?lat=north&lon=5",
            "/get-pollution?lat=91&lon=5",
            "/get-pollution?lat=10&lon=NaN",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Invalid lat/lon", "{uri}");
        }
    }

    #[actix_web::test]
    async fn upstream_failure_is_a_generic_server_error() {
        let app = test::init_service(
            App::new()
                .app_data(state(Arc::new(FakeProvider::failing())))
                .configure(crate::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/get-pollution?lat=1&lon=2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({"error": "Failed to fetch data"}));
    }

    #[actix_web::test]
    async fn health_reports_version() {
        let app = test::init_service(
            App::new()
                .app_data(state(Arc::new(FakeProvider::new(0))))
                .configure(crate::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["healthy"], true);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[::core::prelude::v1::test]
    fn parses_coordinates() {
        let params = PollutionQueryParams {
            lat: Some(" 19.07 ".to_string()),
            lon: Some("72.88".to_string()),
        };
        assert_eq!(parse_coordinate(&params), Ok(Coordinate::new(19.07, 72.88)));
        assert_eq!(
            parse_coordinate(&PollutionQueryParams::default()),
            Err("Missing lat/lon")
        );
    }
}
