//! Habitable-zone statistics over a classified catalog

use std::fmt;

use serde::Serialize;

use crate::catalog::Catalog;

/// How many planets of a catalog are habitable
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub habitable: usize,
    /// `habitable / total`, zero for an empty catalog
    pub fraction: f64,
}

impl Summary {
    pub fn from_flags(flags: &[bool]) -> Self {
        let total = flags.len();
        let habitable = flags.iter().filter(|&&flag| flag).count();
        let fraction = if total == 0 {
            0.0
        } else {
            habitable as f64 / total as f64
        };
        Self {
            total,
            habitable,
            fraction,
        }
    }

    /// Summarize a classified catalog; `None` if it has no such flag column
    pub fn of(catalog: &Catalog, flag_column: &str) -> Option<Self> {
        catalog
            .flags(flag_column)
            .map(|flags| Self::from_flags(&flags))
    }

    pub fn percentage(&self) -> f64 {
        self.fraction * 100.0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} planets in the habitable zone ({:.2}%)",
            self.habitable,
            self.total,
            self.percentage()
        )
    }
}

/// A flagged planet, as listed in summaries
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitablePlanet {
    pub name: Option<String>,
    pub host: Option<String>,
    /// Semi-major axis (AU)
    pub semi_major_axis: Option<f64>,
    /// Equilibrium temperature (K)
    pub equilibrium_temperature: Option<f64>,
}

/// Planets whose flag is set, in catalog order
pub fn habitable_planets(catalog: &Catalog, flag_column: &str) -> Vec<HabitablePlanet> {
    let Some(flags) = catalog.flags(flag_column) else {
        return Vec::new();
    };

    catalog
        .records()
        .zip(flags)
        .filter(|(_, flag)| *flag)
        .map(|(record, _)| HabitablePlanet {
            name: record.planet_name.clone(),
            host: record.planet_host.clone(),
            semi_major_axis: record.orbit_semi_major_axis,
            equilibrium_temperature: record.equilibrium_temperature,
        })
        .collect()
}
