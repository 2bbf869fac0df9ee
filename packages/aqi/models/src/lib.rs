#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! AQI breakpoint, category, and reading types.
//!
//! These types describe the Indian (CPCB) 0–500 Air Quality Index. The
//! breakpoint data itself lives in `air_quality_aqi`; this crate only
//! defines the shapes so that API layers can depend on them without
//! pulling in the calculator.

use air_quality_pollutant_models::Pollutant;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Upper bound of the index scale.
pub const MAX_AQI: u32 = 500;

/// A linear-interpolation segment mapping a concentration range onto an
/// index range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Lower concentration bound (inclusive).
    pub concentration_low: f64,
    /// Upper concentration bound (inclusive).
    pub concentration_high: f64,
    /// Index value at `concentration_low`.
    pub index_low: f64,
    /// Index value at `concentration_high`.
    pub index_high: f64,
}

impl Breakpoint {
    /// Creates a segment from its concentration and index bounds.
    #[must_use]
    pub const fn new(
        concentration_low: f64,
        concentration_high: f64,
        index_low: f64,
        index_high: f64,
    ) -> Self {
        Self {
            concentration_low,
            concentration_high,
            index_low,
            index_high,
        }
    }

    /// Whether `concentration` falls inside this segment, bounds included.
    #[must_use]
    pub fn contains(&self, concentration: f64) -> bool {
        self.concentration_low <= concentration && concentration <= self.concentration_high
    }

    /// Linearly interpolates the index for `concentration` within this
    /// segment.
    ///
    /// Evaluated as `i_lo + ((i_hi - i_lo) / (c_hi - c_lo)) * (c - c_lo)`
    /// with separate rounding at each step, so whole-number results stay
    /// whole and survive truncation.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn interpolate(&self, concentration: f64) -> f64 {
        let slope = (self.index_high - self.index_low)
            / (self.concentration_high - self.concentration_low);
        self.index_low + slope * (concentration - self.concentration_low)
    }
}

/// AQI health category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum AqiCategory {
    /// 0–50
    Good,
    /// 51–100
    Satisfactory,
    /// 101–200
    Moderate,
    /// 201–300
    Poor,
    /// 301–400
    #[serde(rename = "Very Poor")]
    #[strum(serialize = "Very Poor")]
    VeryPoor,
    /// 401 and above
    Severe,
}

impl AqiCategory {
    /// Categorizes an AQI value. Ranges are inclusive of their upper bound
    /// and anything above 400 is [`Self::Severe`].
    #[must_use]
    pub const fn from_aqi(aqi: u32) -> Self {
        match aqi {
            0..=50 => Self::Good,
            51..=100 => Self::Satisfactory,
            101..=200 => Self::Moderate,
            201..=300 => Self::Poor,
            301..=400 => Self::VeryPoor,
            _ => Self::Severe,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Satisfactory => "Satisfactory",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
            Self::Severe => "Severe",
        }
    }

    /// Hex RGB color used by the frontend for this category.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Good => "#00B050",
            Self::Satisfactory => "#92D050",
            Self::Moderate => "#FFFF00",
            Self::Poor => "#FF9900",
            Self::VeryPoor => "#FF0000",
            Self::Severe => "#C00000",
        }
    }

    /// Returns all variants of this enum, best to worst.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Good,
            Self::Satisfactory,
            Self::Moderate,
            Self::Poor,
            Self::VeryPoor,
            Self::Severe,
        ]
    }
}

/// Sub-index computed for each tracked pollutant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubIndexBreakdown {
    /// Fine particulate matter sub-index.
    pub pm2_5: f64,
    /// Coarse particulate matter sub-index.
    pub pm10: f64,
    /// Nitrogen dioxide sub-index.
    pub no2: f64,
    /// Sulphur dioxide sub-index.
    pub so2: f64,
    /// Carbon monoxide sub-index (computed from mg/m³).
    pub co: f64,
}

impl SubIndexBreakdown {
    /// Returns the sub-index for `pollutant`.
    #[must_use]
    pub const fn get(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm2_5 => self.pm2_5,
            Pollutant::Pm10 => self.pm10,
            Pollutant::No2 => self.no2,
            Pollutant::So2 => self.so2,
            Pollutant::Co => self.co,
        }
    }

    /// Sets the sub-index for `pollutant`.
    pub const fn set(&mut self, pollutant: Pollutant, value: f64) {
        match pollutant {
            Pollutant::Pm2_5 => self.pm2_5 = value,
            Pollutant::Pm10 => self.pm10 = value,
            Pollutant::No2 => self.no2 = value,
            Pollutant::So2 => self.so2 = value,
            Pollutant::Co => self.co = value,
        }
    }

    /// Largest sub-index across all pollutants.
    #[must_use]
    pub fn max(&self) -> f64 {
        Pollutant::ALL
            .iter()
            .map(|p| self.get(*p))
            .fold(0.0, f64::max)
    }

    /// Pollutant with the largest sub-index. Ties go to the earlier
    /// pollutant in [`Pollutant::ALL`].
    #[must_use]
    pub fn dominant(&self) -> Pollutant {
        let mut best = Pollutant::Pm2_5;
        for p in Pollutant::ALL {
            if self.get(p) > self.get(best) {
                best = p;
            }
        }
        best
    }
}

/// The AQI computed for one concentration set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AqiReading {
    /// Aggregate index, `0..=500`.
    pub aqi: u32,
    /// Category for `aqi`.
    pub category: AqiCategory,
    /// Per-pollutant sub-indices the aggregate was derived from.
    pub breakdown: SubIndexBreakdown,
}

impl AqiReading {
    /// Display label for the reading's category.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Hex color for the reading's category.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.category.color()
    }
}
