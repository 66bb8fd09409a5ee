//! Error types for catalog loading and processing

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog errors
///
/// Missing values are never errors: they are resolved by the cleaner (dropped rows)
/// or the classifier (negative classification). These variants cover the input
/// that cannot be read as a catalog at all.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File could not be opened, created or written
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Delimited text framing error (unequal row lengths, bad UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A cell could not be parsed as its column's type
    #[error("line {line}: {message}")]
    Parse { line: u64, message: String },

    /// A field name that is not a catalog column
    #[error("unknown catalog field '{0}'")]
    UnknownField(String),

    /// Invalid configuration value or file
    #[error("configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Create an I/O error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error at a one-based line number
    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
