//! Load error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors fatal to a load pass.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file missing or unreadable.
    #[error("Failed to read {path}: {source}")]
    FileUnreadable {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Structurally malformed sheet.
    #[error("Malformed sheet: {0}")]
    Malformed(#[from] csv::Error),

    /// Required column absent from the header.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Non-numeric value in a numeric column.
    #[error(transparent)]
    Validation(#[from] DataValidationError),
}

/// A required column is absent from the sheet header.
#[derive(Debug, Error)]
#[error("Required column missing: {column}")]
pub struct SchemaError {
    /// Name of the missing column, after header trimming.
    pub column: String,
}

/// A numeric column holds a value that does not parse as a number.
#[derive(Debug, Error)]
#[error("Non-numeric value {value:?} in column {column} at row {row}")]
pub struct DataValidationError {
    /// Column name.
    pub column: String,
    /// 1-based data row number, not counting the header.
    pub row: usize,
    /// Offending raw cell value.
    pub value: String,
}
