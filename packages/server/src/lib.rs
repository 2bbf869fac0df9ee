#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the air quality application.
//!
//! Serves `GET /get-pollution?lat=..&lon=..`, which fetches current and
//! forecast pollutant concentrations from `OpenWeatherMap`, converts them
//! into the Indian (CPCB) AQI, and returns a compact JSON report. Also
//! serves the static frontend from `STATIC_DIR`.

mod handlers;
pub mod interactive;
pub mod report;

use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use air_quality_openweather::{AirPollutionProvider, ForecastConfig, OpenWeatherClient};

/// Shared application state.
pub struct AppState {
    /// Upstream air pollution data source.
    pub provider: Arc<dyn AirPollutionProvider>,
    /// Which forecast horizons to report.
    pub forecast: ForecastConfig,
}

/// Registers the API routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/get-pollution", web::get().to(handlers::get_pollution))
        .service(web::scope("/api").route("/health", web::get().to(handlers::health)));
}

/// Starts the air quality API server.
///
/// Builds the `OpenWeatherMap` client from the environment and starts the
/// Actix-Web HTTP server. This is a regular async function — the caller
/// is responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// Reads `BIND_ADDR` (default `127.0.0.1`), `PORT` (default `8080`),
/// `STATIC_DIR` (default `static`), `OPENWEATHER_API_KEY` (required), and
/// `OPENWEATHER_BASE_URL` (optional).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the API key is missing, the HTTP
/// client cannot be built, or the HTTP server fails to bind or encounters
/// a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    log::info!("Configuring OpenWeatherMap client...");
    let client = OpenWeatherClient::from_env().map_err(std::io::Error::other)?;
    log::info!(
        "Using {} at {}",
        client.config().name,
        client.config().base_url
    );

    let state = web::Data::new(AppState {
        forecast: client.config().forecast.clone(),
        provider: Arc::new(client),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
            // Serve frontend static files
            .service(Files::new("/", &static_dir).index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
