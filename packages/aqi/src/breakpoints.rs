//! CPCB breakpoint table (0–500 scale).
//!
//! Six rows per pollutant, ordered by increasing concentration. All
//! concentrations are µg/m³ except carbon monoxide, which is mg/m³.

use air_quality_aqi_models::Breakpoint;
use air_quality_pollutant_models::Pollutant;

/// Rows per pollutant table.
pub const ROWS: usize = 6;

/// A single pollutant's breakpoint rows.
pub type BreakpointTable = [Breakpoint; ROWS];

const fn bp(c_lo: f64, c_hi: f64, i_lo: f64, i_hi: f64) -> Breakpoint {
    Breakpoint::new(c_lo, c_hi, i_lo, i_hi)
}

/// PM2.5, µg/m³ (24-hour average).
pub static PM2_5: BreakpointTable = [
    bp(0.0, 30.0, 0.0, 50.0),
    bp(30.0, 60.0, 51.0, 100.0),
    bp(60.0, 90.0, 101.0, 200.0),
    bp(90.0, 120.0, 201.0, 300.0),
    bp(120.0, 250.0, 301.0, 400.0),
    bp(250.0, 400.0, 401.0, 500.0),
];

/// PM10, µg/m³ (24-hour average).
pub static PM10: BreakpointTable = [
    bp(0.0, 50.0, 0.0, 50.0),
    bp(50.0, 100.0, 51.0, 100.0),
    bp(100.0, 250.0, 101.0, 200.0),
    bp(250.0, 350.0, 201.0, 300.0),
    bp(350.0, 430.0, 301.0, 400.0),
    bp(430.0, 500.0, 401.0, 500.0),
];

/// Nitrogen dioxide, µg/m³ (24-hour average).
pub static NO2: BreakpointTable = [
    bp(0.0, 40.0, 0.0, 50.0),
    bp(40.0, 80.0, 51.0, 100.0),
    bp(80.0, 180.0, 101.0, 200.0),
    bp(180.0, 280.0, 201.0, 300.0),
    bp(280.0, 400.0, 301.0, 400.0),
    bp(400.0, 500.0, 401.0, 500.0),
];

/// Sulphur dioxide, µg/m³ (24-hour average).
pub static SO2: BreakpointTable = [
    bp(0.0, 40.0, 0.0, 50.0),
    bp(40.0, 80.0, 51.0, 100.0),
    bp(80.0, 380.0, 101.0, 200.0),
    bp(380.0, 800.0, 201.0, 300.0),
    bp(800.0, 1600.0, 301.0, 400.0),
    bp(1600.0, 2000.0, 401.0, 500.0),
];

/// Carbon monoxide, mg/m³ (8-hour average). Upstream reports µg/m³.
pub static CO: BreakpointTable = [
    bp(0.0, 1.0, 0.0, 50.0),
    bp(1.0, 2.0, 51.0, 100.0),
    bp(2.0, 10.0, 101.0, 200.0),
    bp(10.0, 17.0, 201.0, 300.0),
    bp(17.0, 34.0, 301.0, 400.0),
    bp(34.0, 50.0, 401.0, 500.0),
];

/// Returns the table for a tracked pollutant.
#[must_use]
pub fn table(pollutant: Pollutant) -> &'static BreakpointTable {
    match pollutant {
        Pollutant::Pm2_5 => &PM2_5,
        Pollutant::Pm10 => &PM10,
        Pollutant::No2 => &NO2,
        Pollutant::So2 => &SO2,
        Pollutant::Co => &CO,
    }
}

/// Looks up a table by upstream identifier. Returns `None` for anything
/// that is not one of the five tracked pollutants.
#[must_use]
pub fn breakpoints_for(pollutant: &str) -> Option<&'static BreakpointTable> {
    pollutant.parse::<Pollutant>().ok().map(table)
}
