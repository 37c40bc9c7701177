//! Error types for binding operations.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for tabbind operations.
#[derive(Debug, Error)]
pub enum BindError {
    /// The record shape or the grid cannot be bound at all.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A cell could not be coerced to the kind of its field.
    #[error("Malformed value at row {row}, column '{column}' (field '{field}'): {raw:?}: {source}")]
    MalformedValue {
        row: usize,
        field: &'static str,
        column: &'static str,
        raw: String,
        #[source]
        source: CoercionError,
    },

    /// A row has no cell at a column index a bound field needs.
    #[error("Row {row} is too short: column '{column}' is at index {index} but the row has {len} cells")]
    RowTooShort {
        row: usize,
        column: &'static str,
        index: usize,
        len: usize,
    },

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Why a cell's text does not fit its field.
#[derive(Debug, Error)]
pub enum CoercionError {
    #[error("invalid integer: {0}")]
    Integer(#[from] ParseIntError),

    #[error("invalid float: {0}")]
    Float(#[from] ParseFloatError),

    #[error("invalid boolean: expected true or false, got {0:?}")]
    Boolean(String),
}

/// Result type alias for tabbind operations.
pub type Result<T> = std::result::Result<T, BindError>;
