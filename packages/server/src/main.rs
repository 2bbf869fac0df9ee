#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Air quality API server binary.

use clap::Parser;

/// Serves current and forecast Indian AQI for a coordinate.
#[derive(Debug, Parser)]
#[command(name = "air_quality_server")]
struct Args {
    /// Prompt for bind address, port, and API key before starting.
    #[arg(long)]
    interactive: bool,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    if args.interactive {
        air_quality_server::interactive::run().await
    } else {
        air_quality_server::run_server().await
    }
}
