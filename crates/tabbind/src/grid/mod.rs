//! Reading and writing grids as delimited text.
//!
//! Tokenizing, quoting and escaping are done by the `csv` crate; this module
//! only moves whole grids in and out of it. Rows are read as-is with no
//! header handling and no length check, so ragged rows reach the binder.

mod detect;

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::binder::{decode_all, encode, Grid};
use crate::error::{BindError, Result};
use crate::field::Record;
use detect::detect_delimiter;

/// Delimited-text settings for grid I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Delimiter to use (None = auto-detect on read, comma on write).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
    /// Trim surrounding whitespace from cells on read.
    pub trim: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
            trim: false,
        }
    }
}

impl GridConfig {
    /// Config with a fixed delimiter.
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self {
            delimiter: Some(delimiter),
            ..Self::default()
        }
    }
}

/// Rows read from delimited text, with the delimiter that split them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedGrid {
    /// All rows, header first.
    pub rows: Grid,
    /// The delimiter used, detected or configured.
    pub delimiter: u8,
}

impl DelimitedGrid {
    /// `config` with its delimiter pinned to the one this grid was read with.
    pub fn config(&self, config: &GridConfig) -> GridConfig {
        GridConfig {
            delimiter: Some(self.delimiter),
            ..config.clone()
        }
    }
}

/// Read every row from `reader`.
pub fn read_grid<Rd: Read>(mut reader: Rd, config: &GridConfig) -> Result<DelimitedGrid> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(csv::Error::from)?;
    parse_bytes(&bytes, config)
}

/// Read every row from the file at `path`.
pub fn read_path(path: impl AsRef<Path>, config: &GridConfig) -> Result<DelimitedGrid> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| BindError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_bytes(&bytes, config)
}

/// Write `grid` to `writer`, quoting cells where needed.
pub fn write_grid<W, S>(writer: W, grid: &[Vec<S>], config: &GridConfig) -> Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let delimiter = config.delimiter.unwrap_or(b',');
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .quote(config.quote)
        .flexible(true)
        .from_writer(writer);

    for row in grid {
        writer.write_record(row.iter().map(|cell| cell.as_ref()))?;
    }
    writer.flush().map_err(csv::Error::from)?;

    debug!(rows = grid.len(), delimiter = %(delimiter as char), "wrote grid");
    Ok(())
}

/// Write `grid` to a new file at `path`.
pub fn write_path<S: AsRef<str>>(
    path: impl AsRef<Path>,
    grid: &[Vec<S>],
    config: &GridConfig,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| BindError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_grid(file, grid, config)
}

/// Read a grid from `reader` and decode all of it into records.
pub fn read_records<R, Rd>(reader: Rd, config: &GridConfig) -> Result<Vec<R>>
where
    R: Record,
    Rd: Read,
{
    let grid = read_grid(reader, config)?;
    decode_all(&grid.rows)
}

/// Encode `records` and write the grid to `writer`.
pub fn write_records<R, W>(writer: W, records: &[R], config: &GridConfig) -> Result<()>
where
    R: Record,
    W: Write,
{
    let grid = encode(records)?;
    write_grid(writer, &grid, config)
}

fn parse_bytes(bytes: &[u8], config: &GridConfig) -> Result<DelimitedGrid> {
    let delimiter = match config.delimiter {
        Some(d) => d,
        None => detect_delimiter(bytes, config.quote),
    };

    let trim = if config.trim {
        csv::Trim::All
    } else {
        csv::Trim::None
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .quote(config.quote)
        .has_headers(false)
        .flexible(true)
        .trim(trim)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    debug!(rows = rows.len(), delimiter = %(delimiter as char), "read grid");
    Ok(DelimitedGrid { rows, delimiter })
}
