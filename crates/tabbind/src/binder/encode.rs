//! Records to grid.

use tracing::debug;

use super::coerce::format_cell;
use super::Grid;
use crate::error::Result;
use crate::field::{DescriptorTable, Record};

/// Encode `records` as a grid: a header of bound column tags followed by one
/// row per record.
///
/// The header is emitted even when `records` is empty. Cells are raw text;
/// quoting is left to whatever writes the grid out.
pub fn encode<R: Record>(records: &[R]) -> Result<Grid> {
    let table = DescriptorTable::<R>::resolve()?;

    debug!(
        shape = table.shape(),
        records = records.len(),
        bound_fields = table.len(),
        "encoding records"
    );

    let mut grid = Vec::with_capacity(records.len() + 1);
    grid.push(table.header());

    for record in records {
        let row = table
            .iter()
            .map(|field| format_cell(&field.accessor, record))
            .collect();
        grid.push(row);
    }

    Ok(grid)
}
