//! In-memory catalog table and delimited-text I/O
//!
//! A `Catalog` keeps every row twice: as the raw cells read from the file, so
//! that columns this crate does not know about survive a read/write cycle, and as
//! a typed [`PlanetRecord`]. Processing stages never mutate a catalog; they build
//! a new one.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::field::Field;
use crate::record::PlanetRecord;

/// Name the offending column when the error points at one
fn describe_cell_error(error: &csv::Error, headers: &StringRecord) -> String {
    match error.kind() {
        csv::ErrorKind::Deserialize { err, .. } => {
            match err.field().and_then(|i| headers.get(i as usize)) {
                Some(column) => format!("column '{}': {}", column, err.kind()),
                None => err.to_string(),
            }
        }
        _ => error.to_string(),
    }
}

/// One catalog row: its raw cells and the typed record parsed from them
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    raw: StringRecord,
    record: PlanetRecord,
}

impl CatalogRow {
    /// Typed view of the row
    pub fn record(&self) -> &PlanetRecord {
        &self.record
    }

    /// Raw cell at a column index
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.raw.get(index)
    }
}

/// An exoplanet catalog table
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    headers: StringRecord,
    rows: Vec<CatalogRow>,
}

impl Catalog {
    /// Build a catalog from typed records, with the standard columns in catalog order
    pub fn from_records(records: impl IntoIterator<Item = PlanetRecord>) -> Self {
        let headers: StringRecord = Field::ALL.iter().map(|f| f.column()).collect();
        let rows = records
            .into_iter()
            .map(|record| {
                let raw: StringRecord = Field::ALL
                    .iter()
                    .map(|&field| record.cell(field).unwrap_or_default())
                    .collect();
                CatalogRow { raw, record }
            })
            .collect();
        Self { headers, rows }
    }

    /// Read a catalog file with a header row
    pub fn read(path: impl AsRef<Path>, delimiter: u8) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
        let catalog = Self::from_reader(file, delimiter)?;
        debug!(path = %path.display(), rows = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Read a catalog from any byte source
    ///
    /// Cells are trimmed. A malformed number fails the whole read with the line
    /// it occurred on; a row with the wrong number of cells fails as well.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for field in Field::CLASSIFIER_INPUTS {
            if !headers.iter().any(|h| h == field.column()) {
                warn!(
                    column = field.column(),
                    "catalog has no such column; every row will be unclassifiable"
                );
            }
        }

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let raw = result?;
            let record: PlanetRecord = raw.deserialize(Some(&headers)).map_err(|e| {
                // Header is line 1
                let line = raw
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(index as u64 + 2);
                CatalogError::parse(line, describe_cell_error(&e, &headers))
            })?;
            rows.push(CatalogRow { raw, record });
        }

        Ok(Self { headers, rows })
    }

    /// Write the catalog, including any appended columns, to a file
    pub fn write(&self, path: impl AsRef<Path>, delimiter: u8) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| CatalogError::io(path, e))?;
        self.to_writer(file, delimiter)?;
        debug!(path = %path.display(), rows = self.len(), "catalog written");
        Ok(())
    }

    /// Write the catalog to any byte sink
    pub fn to_writer<W: Write>(&self, writer: W, delimiter: u8) -> Result<()> {
        let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(&row.raw)?;
        }
        writer.flush().map_err(|e| CatalogError::io("<output>", e))?;
        Ok(())
    }

    /// Render the catalog as delimited text
    pub fn to_csv_string(&self, delimiter: u8) -> Result<String> {
        let mut buffer = Vec::new();
        self.to_writer(&mut buffer, delimiter)?;
        String::from_utf8(buffer)
            .map_err(|e| CatalogError::io("<output>", io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header names in column order
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    /// Typed records in row order
    pub fn records(&self) -> impl Iterator<Item = &PlanetRecord> {
        self.rows.iter().map(|row| &row.record)
    }

    /// Index of a column by exact header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All cells of a column, in row order
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.raw.get(index).unwrap_or_default())
                .collect(),
        )
    }

    /// Read a boolean flag column (`1`/`true` are set, anything else is not)
    pub fn flags(&self, name: &str) -> Option<Vec<bool>> {
        let cells = self.column(name)?;
        Some(
            cells
                .into_iter()
                .map(|cell| cell == "1" || cell.eq_ignore_ascii_case("true"))
                .collect(),
        )
    }

    /// Keep the rows for which `keep` returns true, in their original order
    pub(crate) fn retain_rows(&self, mut keep: impl FnMut(&PlanetRecord) -> bool) -> Self {
        Self {
            headers: self.headers.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| keep(&row.record))
                .cloned()
                .collect(),
        }
    }

    /// A copy of this catalog with a column set to the given cells
    ///
    /// An existing column of the same name is overwritten in place; otherwise the
    /// column is appended. `cells` must hold one entry per row.
    pub(crate) fn with_column(&self, name: &str, cells: &[String]) -> Self {
        debug_assert_eq!(cells.len(), self.rows.len());

        let existing = self.column_index(name);
        let headers = match existing {
            Some(_) => self.headers.clone(),
            None => {
                let mut headers = self.headers.clone();
                headers.push_field(name);
                headers
            }
        };

        let rows = self
            .rows
            .iter()
            .zip(cells)
            .map(|(row, cell)| {
                let raw: StringRecord = match existing {
                    Some(index) => row
                        .raw
                        .iter()
                        .enumerate()
                        .map(|(i, value)| if i == index { cell.as_str() } else { value })
                        .collect(),
                    None => {
                        let mut raw = row.raw.clone();
                        raw.push_field(cell);
                        raw
                    }
                };
                CatalogRow {
                    raw,
                    record: row.record.clone(),
                }
            })
            .collect();

        Self { headers, rows }
    }
}
