//! Exoplanet catalog cleaning and habitable-zone classification
//!
//! Reads a delimited exoplanet catalog, drops rows missing the fields downstream
//! stages need, and labels every planet as inside or outside its host star's
//! habitable zone. Each stage takes a [`Catalog`] by reference and returns a new
//! one; nothing is shared or mutated in place.

pub mod catalog;
pub mod classifier;
pub mod cleaner;
pub mod config;
pub mod error;
pub mod field;
pub mod record;
pub mod summary;

#[cfg(test)]
mod catalog_test;
#[cfg(test)]
mod config_test;

// Re-export key types at crate root
pub use catalog::{Catalog, CatalogRow};
pub use classifier::{
    Classification, Classifier, FLAG_COLUMN, classify, classify_record, classify_records,
    is_in_goldilocks_zone, is_in_habitable_zone,
};
pub use cleaner::{CleaningReport, clean, is_complete};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use field::Field;
pub use record::PlanetRecord;
pub use summary::{HabitablePlanet, Summary, habitable_planets};

// Re-export the physics for convenience
pub use stellar::{HabitableZone, HostStar, ZoneModel};
