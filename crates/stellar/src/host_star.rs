//! Host star parameters and luminosity scaling.

use serde::{Deserialize, Serialize};
use units::{Luminosity, StellarRadius, Temperature};

use crate::habitable_zone::{HabitableZone, ZoneModel};

/// Luminosity from radius and effective temperature via Stefan–Boltzmann scaling
///
/// L/L☉ = (R/R☉)² × (T/T☉)⁴, with T☉ = 5778 K.
///
/// Both factors are even powers, so the result is never negative for finite input.
/// The radius is used as the catalog's R☉ value, unconverted.
pub fn luminosity_from_radius_temperature(
    radius: StellarRadius,
    temperature: Temperature,
) -> Luminosity {
    let radius_ratio = radius.to_solar_radii();
    let temperature_ratio = temperature / Temperature::solar();
    Luminosity::from_solar(radius_ratio.powi(2) * temperature_ratio.powi(4))
}

/// Stellar parameters needed for habitable-zone classification
///
/// Groups the two observables the catalog provides for every host star that
/// determine its luminosity: effective temperature and photospheric radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostStar {
    /// Effective (photospheric) temperature
    pub temperature: Temperature,
    /// Stellar radius (R☉)
    pub radius: StellarRadius,
}

impl HostStar {
    /// Create a new host star context
    pub fn new(temperature: Temperature, radius: StellarRadius) -> Self {
        Self {
            temperature,
            radius,
        }
    }

    /// Solar values (T = 5778 K, R = 1 R☉)
    pub fn solar() -> Self {
        Self {
            temperature: Temperature::solar(),
            radius: StellarRadius::solar(),
        }
    }

    /// Build a host star from catalog cells, if both are present and physical
    ///
    /// Temperature is in Kelvin and radius in solar radii, as in the catalog.
    pub fn from_catalog(temperature_k: Option<f64>, radius_solar: Option<f64>) -> Option<Self> {
        let star = Self::new(
            Temperature::from_kelvin(temperature_k?),
            StellarRadius::from_solar_radii(radius_solar?),
        );
        star.is_physical().then_some(star)
    }

    /// True when both parameters are finite and non-negative
    pub fn is_physical(&self) -> bool {
        self.temperature.is_physical() && self.radius.is_physical()
    }

    /// Bolometric luminosity (L☉)
    pub fn luminosity(&self) -> Luminosity {
        luminosity_from_radius_temperature(self.radius, self.temperature)
    }

    /// Habitable zone boundaries around this star under the given model
    pub fn habitable_zone(&self, model: ZoneModel) -> HabitableZone {
        model.zone(self)
    }
}
