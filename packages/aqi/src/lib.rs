#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Indian (CPCB) Air Quality Index calculation.
//!
//! Converts raw pollutant concentrations into a 0–500 AQI:
//!
//! 1. Each tracked pollutant's concentration is mapped to a **sub-index**
//!    by linear interpolation over its [`breakpoints`] table.
//! 2. The AQI is the maximum sub-index, truncated to an integer.
//! 3. The AQI is bucketed into an [`AqiCategory`] with a label and color.
//!
//! Every function here is total: unknown pollutants contribute nothing,
//! missing concentrations read as zero, and concentrations beyond the
//! table are capped at 500.

pub mod breakpoints;

use air_quality_aqi_models::{AqiCategory, AqiReading, MAX_AQI, SubIndexBreakdown};
use air_quality_pollutant_models::{Components, Pollutant};

/// Sub-index returned for concentrations above every breakpoint row.
pub const CEILING_SUB_INDEX: f64 = 500.0;

/// Carbon monoxide arrives in µg/m³ but its table is in mg/m³.
const CO_UG_PER_MG: f64 = 1000.0;

/// Computes the sub-index for a single pollutant concentration.
///
/// `pollutant` is the upstream identifier (`pm2_5`, `pm10`, `no2`, `so2`,
/// `co`); anything else yields `0.0`. The concentration must already be
/// in the table's unit, so carbon monoxide is expected in mg/m³.
///
/// Rows are scanned in order with inclusive bounds, so a value on a shared
/// boundary takes the lower row.
#[must_use]
pub fn sub_index(concentration: f64, pollutant: &str) -> f64 {
    breakpoints::breakpoints_for(pollutant).map_or(0.0, |rows| interpolate(rows, concentration))
}

/// Typed variant of [`sub_index`].
#[must_use]
pub fn sub_index_for(concentration: f64, pollutant: Pollutant) -> f64 {
    interpolate(breakpoints::table(pollutant), concentration)
}

fn interpolate(rows: &breakpoints::BreakpointTable, concentration: f64) -> f64 {
    // NaN and negatives would otherwise fall through to the ceiling.
    let concentration = concentration.max(0.0);

    rows.iter()
        .find(|row| row.contains(concentration))
        .map_or(CEILING_SUB_INDEX, |row| row.interpolate(concentration))
}

/// Converts an upstream concentration (µg/m³) into the unit used by the
/// pollutant's breakpoint table.
#[must_use]
pub fn to_table_units(pollutant: Pollutant, concentration: f64) -> f64 {
    match pollutant {
        Pollutant::Co => concentration / CO_UG_PER_MG,
        Pollutant::Pm2_5 | Pollutant::Pm10 | Pollutant::No2 | Pollutant::So2 => concentration,
    }
}

/// Computes every tracked pollutant's sub-index for a concentration set.
#[must_use]
pub fn breakdown(components: &Components) -> SubIndexBreakdown {
    let mut out = SubIndexBreakdown::default();
    for pollutant in Pollutant::ALL {
        let concentration = to_table_units(pollutant, components.concentration(pollutant));
        out.set(pollutant, sub_index_for(concentration, pollutant));
    }
    out
}

/// Computes the aggregate AQI: the maximum sub-index, truncated.
#[must_use]
pub fn aggregate(components: &Components) -> u32 {
    truncate(breakdown(components).max())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate(index: f64) -> u32 {
    (index.trunc() as u32).min(MAX_AQI)
}

/// Returns the `(label, color)` pair for an AQI value.
#[must_use]
pub const fn label_for(aqi: u32) -> (&'static str, &'static str) {
    let category = AqiCategory::from_aqi(aqi);
    (category.label(), category.color())
}

/// Computes the full [`AqiReading`] for a concentration set.
#[must_use]
pub fn assess(components: &Components) -> AqiReading {
    let breakdown = breakdown(components);
    let aqi = truncate(breakdown.max());
    let category = AqiCategory::from_aqi(aqi);

    log::debug!(
        "AQI breakdown: pm2_5={:?} -> {:.1}, pm10={:?} -> {:.1}, no2={:?} -> {:.1}, \
         so2={:?} -> {:.1}, co={:.2} mg/m3 -> {:.1}; aqi={aqi} ({category}, driven by {})",
        components.get(Pollutant::Pm2_5.key()),
        breakdown.pm2_5,
        components.get(Pollutant::Pm10.key()),
        breakdown.pm10,
        components.get(Pollutant::No2.key()),
        breakdown.no2,
        components.get(Pollutant::So2.key()),
        breakdown.so2,
        to_table_units(Pollutant::Co, components.concentration(Pollutant::Co)),
        breakdown.co,
        breakdown.dominant(),
    );

    AqiReading {
        aqi,
        category,
        breakdown,
    }
}
