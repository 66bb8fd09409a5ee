//! Habitable-zone ("Goldilocks zone") classification
//!
//! A planet is habitable iff its semi-major axis lies inside its host star's
//! habitable zone, edges included. Each record is classified on its own: nothing
//! here looks at neighbouring rows, so a catalog can be classified in any order
//! or split arbitrarily.
//!
//! A record missing stellar temperature, stellar radius or semi-major axis (or
//! carrying a negative or non-finite value for one of them) is not habitable.
//! That is a classification, not an error.

use serde::Serialize;
use stellar::{HabitableZone, ZoneModel};
use tracing::{debug, info};
use units::{Length, Luminosity};

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::field::Field;
use crate::record::PlanetRecord;

/// Default name of the flag column added to classified catalogs
pub const FLAG_COLUMN: &str = "In Goldilock Zone";

/// Derived column: host star luminosity (L☉)
pub const LUMINOSITY_COLUMN: &str = "Stellar Luminosity";

/// Derived column: habitable zone inner edge (AU)
pub const ZONE_INNER_COLUMN: &str = "Habitable Zone Inner";

/// Derived column: habitable zone outer edge (AU)
pub const ZONE_OUTER_COLUMN: &str = "Habitable Zone Outer";

/// Reject flag column names that would overwrite catalog or derived columns
///
/// Reclassifying overwrites the flag column in place, so a flag named after an
/// input column would destroy the data it was computed from.
pub(crate) fn check_flag_column(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::config("flag column name must not be empty"));
    }
    if let Some(field) = Field::ALL.iter().find(|field| field.column() == name) {
        return Err(CatalogError::config(format!(
            "flag column '{}' would overwrite the catalog column {}",
            name, field
        )));
    }
    if [LUMINOSITY_COLUMN, ZONE_INNER_COLUMN, ZONE_OUTER_COLUMN].contains(&name) {
        return Err(CatalogError::config(format!(
            "flag column '{}' would overwrite a derived column",
            name
        )));
    }
    Ok(())
}

/// Values derived while classifying one record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Host star luminosity, when the star is fully described
    pub luminosity: Option<Luminosity>,
    /// Habitable zone bounds, when the star is fully described
    pub zone: Option<HabitableZone>,
    pub habitable: bool,
}

impl Classification {
    fn unclassifiable() -> Self {
        Self {
            luminosity: None,
            zone: None,
            habitable: false,
        }
    }
}

/// Classify one record, keeping the intermediate values
pub fn classify_record(record: &PlanetRecord, model: ZoneModel) -> Classification {
    let Some(star) = record.host_star() else {
        return Classification::unclassifiable();
    };

    let luminosity = star.luminosity();
    let zone = star.habitable_zone(model);
    let habitable = record
        .semi_major_axis()
        .filter(Length::is_physical)
        .is_some_and(|a| zone.contains(a));

    Classification {
        luminosity: Some(luminosity),
        zone: Some(zone),
        habitable,
    }
}

/// Whether a record lies in its star's habitable zone under the given model
pub fn is_in_habitable_zone(record: &PlanetRecord, model: ZoneModel) -> bool {
    classify_record(record, model).habitable
}

/// Whether a record lies in its star's habitable zone under the canonical model
///
/// L = R² (T / 5778 K)⁴, inner edge 0.75 √L AU, outer edge 1.77 √L AU.
pub fn is_in_goldilocks_zone(record: &PlanetRecord) -> bool {
    is_in_habitable_zone(record, ZoneModel::LuminosityScaled)
}

/// Flags for a slice of records, in order
pub fn classify_records(records: &[PlanetRecord], model: ZoneModel) -> Vec<bool> {
    records
        .iter()
        .map(|record| is_in_habitable_zone(record, model))
        .collect()
}

/// Classify a catalog under the given model with the default flag column
pub fn classify(catalog: &Catalog, model: ZoneModel) -> Catalog {
    Classifier::new(model).classify(catalog)
}

/// Adds habitable-zone columns to catalogs
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
    model: ZoneModel,
    flag_column: String,
    derived_columns: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ZoneModel::default())
    }
}

impl Classifier {
    pub fn new(model: ZoneModel) -> Self {
        Self {
            model,
            flag_column: FLAG_COLUMN.to_string(),
            derived_columns: false,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        check_flag_column(&config.flag_column)?;
        Ok(Self {
            model: config.zone_model,
            flag_column: config.flag_column.clone(),
            derived_columns: config.derived_columns,
        })
    }

    /// Name the flag column
    ///
    /// Fails for an empty name or one that is already a catalog or derived column.
    pub fn flag_column(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_flag_column(&name)?;
        self.flag_column = name;
        Ok(self)
    }

    /// Also write luminosity and zone-edge columns
    pub fn derived_columns(mut self, enabled: bool) -> Self {
        self.derived_columns = enabled;
        self
    }

    pub fn model(&self) -> ZoneModel {
        self.model
    }

    pub fn flag_column_name(&self) -> &str {
        &self.flag_column
    }

    /// A new catalog with the flag column (`1`/`0`) set for every row
    ///
    /// Columns that already exist are overwritten rather than duplicated, so
    /// classifying a classified catalog reproduces it.
    pub fn classify(&self, catalog: &Catalog) -> Catalog {
        debug!(model = %self.model, rows = catalog.len(), "classifying catalog");

        let classifications: Vec<Classification> = catalog
            .records()
            .map(|record| classify_record(record, self.model))
            .collect();

        let flags: Vec<String> = classifications
            .iter()
            .map(|c| if c.habitable { "1" } else { "0" }.to_string())
            .collect();
        let mut classified = catalog.with_column(&self.flag_column, &flags);

        if self.derived_columns {
            let luminosity: Vec<String> = classifications
                .iter()
                .map(|c| format_optional(c.luminosity.map(|l| l.to_solar())))
                .collect();
            let inner: Vec<String> = classifications
                .iter()
                .map(|c| format_optional(c.zone.map(|z| z.inner_edge.to_au())))
                .collect();
            let outer: Vec<String> = classifications
                .iter()
                .map(|c| format_optional(c.zone.map(|z| z.outer_edge.to_au())))
                .collect();

            classified = classified
                .with_column(LUMINOSITY_COLUMN, &luminosity)
                .with_column(ZONE_INNER_COLUMN, &inner)
                .with_column(ZONE_OUTER_COLUMN, &outer);
        }

        let habitable = classifications.iter().filter(|c| c.habitable).count();
        info!(
            model = %self.model,
            rows = catalog.len(),
            habitable,
            "catalog classified"
        );

        classified
    }
}

fn format_optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
