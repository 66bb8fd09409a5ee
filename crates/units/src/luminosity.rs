use serde::{Deserialize, Serialize};

use crate::quantity::quantity;

/// Bolometric luminosity in solar units (L☉).
///
/// Habitable-zone distances scale as √L, so `sqrt()` returns the AU scale
/// factor directly.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Luminosity(f64); // Base unit: L☉

quantity!(Luminosity);

impl Luminosity {
    /// Creates a zero luminosity value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// The Sun (1 L☉)
    pub fn solar() -> Self {
        Self(1.0)
    }

    /// Creates a new `Luminosity` from a value in solar luminosities.
    pub fn from_solar(value: f64) -> Self {
        Self(value)
    }

    /// Returns the luminosity in solar luminosities.
    pub fn to_solar(&self) -> f64 {
        self.0
    }

    /// Square root in solar units, the AU scale factor of habitable-zone edges.
    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }
}
