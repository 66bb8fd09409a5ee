//! Typed physical quantities for stellar and orbital catalog data.

mod quantity;

pub mod length;
pub mod luminosity;
pub mod radius;
pub mod temperature;


pub use length::Length;
pub use luminosity::Luminosity;
pub use radius::StellarRadius;
pub use temperature::{SOLAR_EFFECTIVE_TEMPERATURE_K, Temperature};
