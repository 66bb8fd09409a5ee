//! One row of the exoplanet catalog
//!
//! Every cell is optional. Empty cells, and the literal `NaN` some exports use
//! for missing measurements, deserialize to `None`, so "missing" is a type-level
//! branch rather than a floating-point comparison.

use serde::{Deserialize, Deserializer, Serialize};
use stellar::HostStar;
use units::{Length, StellarRadius, Temperature};

use crate::field::Field;

fn optional_measurement<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_nan()))
}

/// A planet and its host star as observed
///
/// Units follow the catalog: orbital distance in AU, period in days, planet mass in
/// Jupiter masses, stellar radius and mass in solar units, temperatures in Kelvin.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetRecord {
    #[serde(rename = "No.")]
    pub number: Option<u32>,
    #[serde(rename = "Planet Name")]
    pub planet_name: Option<String>,
    #[serde(rename = "Planet Host")]
    pub planet_host: Option<String>,
    #[serde(rename = "Num Stars")]
    pub num_stars: Option<u32>,
    #[serde(rename = "Num Planets")]
    pub num_planets: Option<u32>,
    #[serde(rename = "Discovery Method")]
    pub discovery_method: Option<String>,
    #[serde(rename = "Discovery Year")]
    pub discovery_year: Option<u32>,
    #[serde(rename = "Discovery Facility")]
    pub discovery_facility: Option<String>,
    #[serde(rename = "Orbital Period Days", deserialize_with = "optional_measurement")]
    pub orbital_period_days: Option<f64>,
    /// Semi-major axis (AU)
    #[serde(rename = "Orbit Semi-Major Axis", deserialize_with = "optional_measurement")]
    pub orbit_semi_major_axis: Option<f64>,
    /// Planet mass (Jupiter masses)
    #[serde(rename = "Mass", deserialize_with = "optional_measurement")]
    pub mass: Option<f64>,
    #[serde(rename = "Eccentricity", deserialize_with = "optional_measurement")]
    pub eccentricity: Option<f64>,
    /// Incident flux (Earth units)
    #[serde(rename = "Insolation Flux", deserialize_with = "optional_measurement")]
    pub insolation_flux: Option<f64>,
    /// Planet equilibrium temperature (K)
    #[serde(rename = "Equilibrium Temperature", deserialize_with = "optional_measurement")]
    pub equilibrium_temperature: Option<f64>,
    #[serde(rename = "Spectral Type")]
    pub spectral_type: Option<String>,
    /// Host star effective temperature (K)
    #[serde(
        rename = "Stellar Effective Temperature",
        deserialize_with = "optional_measurement"
    )]
    pub stellar_effective_temperature: Option<f64>,
    /// Host star radius (R☉)
    #[serde(rename = "Stellar Radius", deserialize_with = "optional_measurement")]
    pub stellar_radius: Option<f64>,
    /// Host star mass (M☉)
    #[serde(rename = "Stellar Mass", deserialize_with = "optional_measurement")]
    pub stellar_mass: Option<f64>,
    /// [Fe/H] or [M/H] in dex
    #[serde(rename = "Stellar Metallicity", deserialize_with = "optional_measurement")]
    pub stellar_metallicity: Option<f64>,
    #[serde(rename = "Stellar Metallicity Ratio")]
    pub stellar_metallicity_ratio: Option<String>,
    /// log10(g / cm s⁻²)
    #[serde(rename = "Stellar Surface Gravity", deserialize_with = "optional_measurement")]
    pub stellar_surface_gravity: Option<f64>,
    /// Distance from the Sun (pc)
    #[serde(rename = "Distance", deserialize_with = "optional_measurement")]
    pub distance: Option<f64>,
    #[serde(rename = "Gaia Magnitude", deserialize_with = "optional_measurement")]
    pub gaia_magnitude: Option<f64>,
}

impl PlanetRecord {
    /// A record with only a planet and host name set
    pub fn named(planet: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            planet_name: Some(planet.into()),
            planet_host: Some(host.into()),
            ..Self::default()
        }
    }

    /// Set the orbital semi-major axis (AU)
    pub fn with_semi_major_axis(mut self, au: f64) -> Self {
        self.orbit_semi_major_axis = Some(au);
        self
    }

    /// Set the host star effective temperature (K) and radius (R☉)
    pub fn with_host_star(mut self, temperature_k: f64, radius_solar: f64) -> Self {
        self.stellar_effective_temperature = Some(temperature_k);
        self.stellar_radius = Some(radius_solar);
        self
    }

    /// Clear a field, making it missing
    pub fn without(mut self, field: Field) -> Self {
        match field {
            Field::Number => self.number = None,
            Field::PlanetName => self.planet_name = None,
            Field::PlanetHost => self.planet_host = None,
            Field::NumStars => self.num_stars = None,
            Field::NumPlanets => self.num_planets = None,
            Field::DiscoveryMethod => self.discovery_method = None,
            Field::DiscoveryYear => self.discovery_year = None,
            Field::DiscoveryFacility => self.discovery_facility = None,
            Field::OrbitalPeriodDays => self.orbital_period_days = None,
            Field::OrbitSemiMajorAxis => self.orbit_semi_major_axis = None,
            Field::Mass => self.mass = None,
            Field::Eccentricity => self.eccentricity = None,
            Field::InsolationFlux => self.insolation_flux = None,
            Field::EquilibriumTemperature => self.equilibrium_temperature = None,
            Field::SpectralType => self.spectral_type = None,
            Field::StellarEffectiveTemperature => self.stellar_effective_temperature = None,
            Field::StellarRadius => self.stellar_radius = None,
            Field::StellarMass => self.stellar_mass = None,
            Field::StellarMetallicity => self.stellar_metallicity = None,
            Field::StellarMetallicityRatio => self.stellar_metallicity_ratio = None,
            Field::StellarSurfaceGravity => self.stellar_surface_gravity = None,
            Field::Distance => self.distance = None,
            Field::GaiaMagnitude => self.gaia_magnitude = None,
        }
        self
    }

    /// Cell text for a field, `None` when missing
    ///
    /// Numbers use the shortest representation that parses back to the same value.
    pub fn cell(&self, field: Field) -> Option<String> {
        fn text(value: &Option<String>) -> Option<String> {
            value.clone()
        }
        fn number<T: ToString>(value: Option<T>) -> Option<String> {
            value.map(|v| v.to_string())
        }

        match field {
            Field::Number => number(self.number),
            Field::PlanetName => text(&self.planet_name),
            Field::PlanetHost => text(&self.planet_host),
            Field::NumStars => number(self.num_stars),
            Field::NumPlanets => number(self.num_planets),
            Field::DiscoveryMethod => text(&self.discovery_method),
            Field::DiscoveryYear => number(self.discovery_year),
            Field::DiscoveryFacility => text(&self.discovery_facility),
            Field::OrbitalPeriodDays => number(self.orbital_period_days),
            Field::OrbitSemiMajorAxis => number(self.orbit_semi_major_axis),
            Field::Mass => number(self.mass),
            Field::Eccentricity => number(self.eccentricity),
            Field::InsolationFlux => number(self.insolation_flux),
            Field::EquilibriumTemperature => number(self.equilibrium_temperature),
            Field::SpectralType => text(&self.spectral_type),
            Field::StellarEffectiveTemperature => number(self.stellar_effective_temperature),
            Field::StellarRadius => number(self.stellar_radius),
            Field::StellarMass => number(self.stellar_mass),
            Field::StellarMetallicity => number(self.stellar_metallicity),
            Field::StellarMetallicityRatio => text(&self.stellar_metallicity_ratio),
            Field::StellarSurfaceGravity => number(self.stellar_surface_gravity),
            Field::Distance => number(self.distance),
            Field::GaiaMagnitude => number(self.gaia_magnitude),
        }
    }

    /// Whether a field has a value
    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::Number => self.number.is_some(),
            Field::PlanetName => self.planet_name.is_some(),
            Field::PlanetHost => self.planet_host.is_some(),
            Field::NumStars => self.num_stars.is_some(),
            Field::NumPlanets => self.num_planets.is_some(),
            Field::DiscoveryMethod => self.discovery_method.is_some(),
            Field::DiscoveryYear => self.discovery_year.is_some(),
            Field::DiscoveryFacility => self.discovery_facility.is_some(),
            Field::SpectralType => self.spectral_type.is_some(),
            Field::StellarMetallicityRatio => self.stellar_metallicity_ratio.is_some(),
            numeric => self.measurement(numeric).is_some(),
        }
    }

    /// Value of a numeric measurement field; `None` for text and count fields
    pub fn measurement(&self, field: Field) -> Option<f64> {
        match field {
            Field::OrbitalPeriodDays => self.orbital_period_days,
            Field::OrbitSemiMajorAxis => self.orbit_semi_major_axis,
            Field::Mass => self.mass,
            Field::Eccentricity => self.eccentricity,
            Field::InsolationFlux => self.insolation_flux,
            Field::EquilibriumTemperature => self.equilibrium_temperature,
            Field::StellarEffectiveTemperature => self.stellar_effective_temperature,
            Field::StellarRadius => self.stellar_radius,
            Field::StellarMass => self.stellar_mass,
            Field::StellarMetallicity => self.stellar_metallicity,
            Field::StellarSurfaceGravity => self.stellar_surface_gravity,
            Field::Distance => self.distance,
            Field::GaiaMagnitude => self.gaia_magnitude,
            _ => None,
        }
    }

    /// Orbital semi-major axis
    pub fn semi_major_axis(&self) -> Option<Length> {
        self.orbit_semi_major_axis.map(Length::from_au)
    }

    /// Host star effective temperature
    pub fn stellar_temperature(&self) -> Option<Temperature> {
        self.stellar_effective_temperature.map(Temperature::from_kelvin)
    }

    /// Host star radius
    pub fn stellar_radius(&self) -> Option<StellarRadius> {
        self.stellar_radius.map(StellarRadius::from_solar_radii)
    }

    /// Host star parameters, when temperature and radius are both present and physical
    pub fn host_star(&self) -> Option<HostStar> {
        HostStar::from_catalog(self.stellar_effective_temperature, self.stellar_radius)
    }
}
