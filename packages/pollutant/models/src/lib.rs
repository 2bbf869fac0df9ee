#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Pollutant identifiers and concentration sets.
//!
//! [`Pollutant`] names the five pollutants that contribute to the AQI.
//! [`Components`] is the raw concentration mapping reported by the upstream
//! provider for one point in time. It keeps every field it was given,
//! including pollutants that do not contribute to the index (ozone,
//! ammonia, nitric oxide), so responses can pass it through unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumString};

/// A pollutant tracked by the AQI calculation.
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
pub enum Pollutant {
    /// Fine particulate matter (diameter under 2.5 µm)
    #[serde(rename = "pm2_5")]
    #[strum(serialize = "pm2_5")]
    Pm2_5,
    /// Coarse particulate matter (diameter under 10 µm)
    #[serde(rename = "pm10")]
    #[strum(serialize = "pm10")]
    Pm10,
    /// Nitrogen dioxide
    #[serde(rename = "no2")]
    #[strum(serialize = "no2")]
    No2,
    /// Sulphur dioxide
    #[serde(rename = "so2")]
    #[strum(serialize = "so2")]
    So2,
    /// Carbon monoxide
    #[serde(rename = "co")]
    #[strum(serialize = "co")]
    Co,
}

impl Pollutant {
    /// Every tracked pollutant, in breakpoint-table order.
    pub const ALL: [Self; 5] = [Self::Pm2_5, Self::Pm10, Self::No2, Self::So2, Self::Co];

    /// Returns the identifier used as the key in upstream component maps.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Pm2_5 => "pm2_5",
            Self::Pm10 => "pm10",
            Self::No2 => "no2",
            Self::So2 => "so2",
            Self::Co => "co",
        }
    }
}

/// Pollutant concentrations for a single point in time, in µg/m³.
///
/// Keys are upstream field names. Values are held as the JSON the provider
/// sent, so fields this service does not interpret (or does not expect to
/// be numeric) are echoed back exactly. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Components(BTreeMap<String, Value>);

impl Components {
    /// Creates an empty concentration set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the concentration for `pollutant`, or `0.0` when the
    /// upstream payload did not report it as a number.
    #[must_use]
    pub fn concentration(&self, pollutant: Pollutant) -> f64 {
        self.get(pollutant.key()).unwrap_or(0.0)
    }

    /// Returns a field as a number, if present and numeric.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Number of fields present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no fields are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Components {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Value::from(v)))
                .collect(),
        )
    }
}
