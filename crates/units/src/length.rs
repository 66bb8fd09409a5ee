use serde::{Deserialize, Serialize};

use crate::quantity::quantity;

/// Orbital distance, stored in AU.
///
/// Catalogs give semi-major axes in AU and habitable-zone edges come out in AU,
/// so an orbit and a zone edge compare without conversion.
///
/// ```rust
/// use units::Length;
///
/// let mercury = Length::from_au(0.39);
/// let earth = Length::from_au(1.0);
/// assert!(mercury < earth);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

quantity!(Length);

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(au: f64) -> Self {
        Self(au)
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0
    }
}
