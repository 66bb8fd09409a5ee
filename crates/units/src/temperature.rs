use serde::{Deserialize, Serialize};

use crate::quantity::quantity;

/// Effective temperature of the Sun (K), the reference for luminosity scaling.
pub const SOLAR_EFFECTIVE_TEMPERATURE_K: f64 = 5778.0;

/// Absolute temperature in Kelvin.
///
/// ```rust
/// use units::Temperature;
///
/// let red_dwarf = Temperature::from_kelvin(3200.0);
/// assert!(red_dwarf / Temperature::solar() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

quantity!(Temperature);

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(kelvin: f64) -> Self {
        Self(kelvin)
    }

    /// Effective temperature of the Sun (5778 K).
    pub fn solar() -> Self {
        Self(SOLAR_EFFECTIVE_TEMPERATURE_K)
    }

    /// Returns the temperature value in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }
}
