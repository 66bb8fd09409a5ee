//! Catalog processing configuration
//!
//! Loaded from a TOML file; every key is optional.
//!
//! ```toml
//! required_fields = ["Planet Name", "Orbit Semi-Major Axis", "Stellar Effective Temperature"]
//! zone_model = "luminosity-scaled"
//! flag_column = "In Goldilock Zone"
//! derived_columns = true
//! delimiter = ","
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use stellar::ZoneModel;
use tracing::debug;

use crate::classifier::{check_flag_column, FLAG_COLUMN};
use crate::error::{CatalogError, Result};
use crate::field::Field;

/// Settings shared by the cleaning and classification stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Fields a row must carry to survive cleaning
    pub required_fields: Vec<Field>,
    /// Habitable-zone approximation
    pub zone_model: ZoneModel,
    /// Name of the habitability flag column
    pub flag_column: String,
    /// Also write luminosity and zone-edge columns
    pub derived_columns: bool,
    /// Cell delimiter (single ASCII character)
    pub delimiter: char,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            required_fields: Field::CLEANING_DEFAULTS.to_vec(),
            zone_model: ZoneModel::default(),
            flag_column: FLAG_COLUMN.to_string(),
            derived_columns: false,
            delimiter: ',',
        }
    }
}

impl CatalogConfig {
    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.delimiter_byte()?;
        check_flag_column(&self.flag_column)
    }

    /// The delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(CatalogError::config(format!(
                "delimiter '{}' is not a single ASCII character",
                self.delimiter
            )))
        }
    }
}
