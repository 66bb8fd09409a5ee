use serde::{Deserialize, Serialize};

use crate::quantity::quantity;

/// Stellar radius in solar radii (R☉).
///
/// Catalogs report host radii in R☉ and the luminosity relation consumes the
/// same ratio, so the value is kept as given rather than converted to AU.
///
/// ```rust
/// use units::StellarRadius;
///
/// let giant = StellarRadius::from_solar_radii(10.0);
/// assert_eq!(giant / StellarRadius::solar(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct StellarRadius(f64); // Base unit: R☉

quantity!(StellarRadius);

impl StellarRadius {
    /// Creates a new `StellarRadius` from a value in solar radii.
    pub fn from_solar_radii(radii: f64) -> Self {
        Self(radii)
    }

    /// The Sun (1 R☉)
    pub fn solar() -> Self {
        Self(1.0)
    }

    /// Returns the radius in solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.0
    }
}
