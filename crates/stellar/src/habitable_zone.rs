//! Circumstellar habitable zone boundaries
//!
//! Two empirical approximations of the habitable zone circulate in the exoplanet
//! catalog tooling, and they disagree:
//!
//! | Model               | Inner edge (AU)           | Outer edge (AU)           |
//! |---------------------|---------------------------|---------------------------|
//! | `LuminosityScaled`  | 0.75 × √L                 | 1.77 × √L                 |
//! | `TemperatureScaled` | 0.95 × √(T / 5780 K)      | 1.37 × √(T / 5780 K)      |
//!
//! `LuminosityScaled` is the canonical model and the default. `TemperatureScaled`
//! ignores stellar radius and is only available when selected by name. The two
//! are never blended.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use units::{Length, Luminosity};

use crate::host_star::HostStar;

/// Habitable zone boundaries
///
/// Both edges are inclusive: a planet exactly on either edge is inside the zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitableZone {
    pub inner_edge: Length,
    pub outer_edge: Length,
}

impl HabitableZone {
    /// Inner edge scale factor of the luminosity-scaled model (AU per √L☉)
    pub const INNER_SCALE: f64 = 0.75;

    /// Outer edge scale factor of the luminosity-scaled model (AU per √L☉)
    pub const OUTER_SCALE: f64 = 1.77;

    /// Canonical habitable zone for a star of the given luminosity
    ///
    /// # Examples
    ///
    /// ```
    /// use stellar::HabitableZone;
    /// use units::{Length, Luminosity};
    ///
    /// let hz = HabitableZone::from_luminosity(Luminosity::solar());
    /// assert!(hz.contains(Length::from_au(1.0)));
    /// assert!(!hz.contains(Length::from_au(0.39)));
    /// ```
    pub fn from_luminosity(luminosity: Luminosity) -> Self {
        let scale = luminosity.sqrt();
        Self {
            inner_edge: Length::from_au(scale * Self::INNER_SCALE),
            outer_edge: Length::from_au(scale * Self::OUTER_SCALE),
        }
    }

    /// Whether an orbit with this semi-major axis lies inside the zone (inclusive)
    pub fn contains(&self, semi_major_axis: Length) -> bool {
        self.inner_edge <= semi_major_axis && semi_major_axis <= self.outer_edge
    }

    /// Radial extent of the zone
    pub fn width(&self) -> Length {
        self.outer_edge - self.inner_edge
    }
}

impl fmt::Display for HabitableZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4}-{:.4} AU",
            self.inner_edge.to_au(),
            self.outer_edge.to_au()
        )
    }
}

/// Selects which habitable-zone approximation bounds the zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneModel {
    /// √L scaling with L from radius and temperature (canonical)
    #[default]
    LuminosityScaled,

    /// √(T/T_ref) scaling on temperature alone, T_ref = 5780 K
    TemperatureScaled,
}

impl ZoneModel {
    /// Reference temperature of the temperature-scaled model.
    ///
    /// This model was calibrated against 5780 K rather than the 5778 K used for luminosity.
    pub const TEMPERATURE_SCALED_REFERENCE_K: f64 = 5780.0;

    /// Inner edge scale factor of the temperature-scaled model
    pub const TEMPERATURE_SCALED_INNER: f64 = 0.95;

    /// Outer edge scale factor of the temperature-scaled model
    pub const TEMPERATURE_SCALED_OUTER: f64 = 1.37;

    /// Habitable zone around a host star under this model
    pub fn zone(&self, star: &HostStar) -> HabitableZone {
        match self {
            Self::LuminosityScaled => HabitableZone::from_luminosity(star.luminosity()),
            Self::TemperatureScaled => {
                let scale = (star.temperature.to_kelvin() / Self::TEMPERATURE_SCALED_REFERENCE_K)
                    .sqrt();
                HabitableZone {
                    inner_edge: Length::from_au(scale * Self::TEMPERATURE_SCALED_INNER),
                    outer_edge: Length::from_au(scale * Self::TEMPERATURE_SCALED_OUTER),
                }
            }
        }
    }

    /// Name used in configuration files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::LuminosityScaled => "luminosity-scaled",
            Self::TemperatureScaled => "temperature-scaled",
        }
    }
}

impl fmt::Display for ZoneModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A zone model name that matches neither known model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown habitable-zone model '{0}' (expected luminosity-scaled or temperature-scaled)")]
pub struct UnknownZoneModel(pub String);

impl FromStr for ZoneModel {
    type Err = UnknownZoneModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "luminosity-scaled" | "luminosity" => Ok(Self::LuminosityScaled),
            "temperature-scaled" | "temperature" => Ok(Self::TemperatureScaled),
            _ => Err(UnknownZoneModel(s.to_string())),
        }
    }
}
