//! Catalog column names

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A column of the exoplanet catalog
///
/// Columns follow the 2021 NASA Exoplanet Archive export. `column()` is the exact
/// header text; parsing also accepts the snake_case field name and ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Field {
    Number,
    PlanetName,
    PlanetHost,
    NumStars,
    NumPlanets,
    DiscoveryMethod,
    DiscoveryYear,
    DiscoveryFacility,
    OrbitalPeriodDays,
    OrbitSemiMajorAxis,
    Mass,
    Eccentricity,
    InsolationFlux,
    EquilibriumTemperature,
    SpectralType,
    StellarEffectiveTemperature,
    StellarRadius,
    StellarMass,
    StellarMetallicity,
    StellarMetallicityRatio,
    StellarSurfaceGravity,
    Distance,
    GaiaMagnitude,
}

impl Field {
    /// Every column, in catalog order
    pub const ALL: [Field; 23] = [
        Field::Number,
        Field::PlanetName,
        Field::PlanetHost,
        Field::NumStars,
        Field::NumPlanets,
        Field::DiscoveryMethod,
        Field::DiscoveryYear,
        Field::DiscoveryFacility,
        Field::OrbitalPeriodDays,
        Field::OrbitSemiMajorAxis,
        Field::Mass,
        Field::Eccentricity,
        Field::InsolationFlux,
        Field::EquilibriumTemperature,
        Field::SpectralType,
        Field::StellarEffectiveTemperature,
        Field::StellarRadius,
        Field::StellarMass,
        Field::StellarMetallicity,
        Field::StellarMetallicityRatio,
        Field::StellarSurfaceGravity,
        Field::Distance,
        Field::GaiaMagnitude,
    ];

    /// Columns a row must carry to survive the default cleaning pass
    pub const CLEANING_DEFAULTS: [Field; 7] = [
        Field::PlanetName,
        Field::PlanetHost,
        Field::OrbitalPeriodDays,
        Field::OrbitSemiMajorAxis,
        Field::StellarEffectiveTemperature,
        Field::EquilibriumTemperature,
        Field::InsolationFlux,
    ];

    /// Columns read by the habitable-zone classifier
    pub const CLASSIFIER_INPUTS: [Field; 3] = [
        Field::OrbitSemiMajorAxis,
        Field::StellarEffectiveTemperature,
        Field::StellarRadius,
    ];

    /// Exact header text of this column
    pub fn column(&self) -> &'static str {
        match self {
            Self::Number => "No.",
            Self::PlanetName => "Planet Name",
            Self::PlanetHost => "Planet Host",
            Self::NumStars => "Num Stars",
            Self::NumPlanets => "Num Planets",
            Self::DiscoveryMethod => "Discovery Method",
            Self::DiscoveryYear => "Discovery Year",
            Self::DiscoveryFacility => "Discovery Facility",
            Self::OrbitalPeriodDays => "Orbital Period Days",
            Self::OrbitSemiMajorAxis => "Orbit Semi-Major Axis",
            Self::Mass => "Mass",
            Self::Eccentricity => "Eccentricity",
            Self::InsolationFlux => "Insolation Flux",
            Self::EquilibriumTemperature => "Equilibrium Temperature",
            Self::SpectralType => "Spectral Type",
            Self::StellarEffectiveTemperature => "Stellar Effective Temperature",
            Self::StellarRadius => "Stellar Radius",
            Self::StellarMass => "Stellar Mass",
            Self::StellarMetallicity => "Stellar Metallicity",
            Self::StellarMetallicityRatio => "Stellar Metallicity Ratio",
            Self::StellarSurfaceGravity => "Stellar Surface Gravity",
            Self::Distance => "Distance",
            Self::GaiaMagnitude => "Gaia Magnitude",
        }
    }
}

/// Lowercase with every non-alphanumeric character dropped, so that
/// "Orbit Semi-Major Axis" and "orbit_semi_major_axis" compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Field {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        // "No." normalizes to "no", which is also how people spell it by hand
        if wanted == "number" {
            return Ok(Self::Number);
        }
        Self::ALL
            .into_iter()
            .find(|field| normalize(field.column()) == wanted)
            .ok_or_else(|| CatalogError::UnknownField(s.to_string()))
    }
}

impl TryFrom<String> for Field {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Field> for &'static str {
    fn from(field: Field) -> Self {
        field.column()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}
