//! Grid to records.

use tracing::debug;

use super::coerce::assign_cell;
use super::header::HeaderIndex;
use crate::error::{BindError, Result};
use crate::field::{BoundField, DescriptorTable, Record};

/// Decode `grid` into records appended to `out`.
///
/// Row 0 is the header; every later row becomes one record, starting from
/// `R::default()`. Columns are matched by name, so column order in the grid
/// does not matter. A bound field whose column is missing from the header
/// keeps its default value, and header columns no field is bound to are
/// ignored.
///
/// `out` is appended to, never cleared. If a row fails, decoding stops there
/// and the records of earlier rows stay in `out`; use [`decode_all`] to get
/// all-or-nothing behavior.
///
/// Row numbers in errors are grid indices: the first data row is row 1.
pub fn decode<R, S>(grid: &[Vec<S>], out: &mut Vec<R>) -> Result<()>
where
    R: Record,
    S: AsRef<str>,
{
    let Some((header, rows)) = grid.split_first() else {
        return Err(BindError::InvalidInput(format!(
            "cannot decode {}: grid has no header row",
            R::NAME
        )));
    };

    let table = DescriptorTable::<R>::resolve()?;
    let index = HeaderIndex::from_row(header);

    let mut plan = Vec::with_capacity(table.len());
    for field in table.iter() {
        match index.position(field.column) {
            Some(position) => plan.push((field, position)),
            None => debug!(
                shape = table.shape(),
                column = field.column,
                "column not in header, field keeps its default"
            ),
        }
    }

    debug!(
        shape = table.shape(),
        rows = rows.len(),
        matched_columns = plan.len(),
        bound_fields = table.len(),
        "decoding grid"
    );

    out.reserve(rows.len());
    for (offset, row) in rows.iter().enumerate() {
        let record = decode_row(&plan, row, offset + 1)?;
        out.push(record);
    }

    Ok(())
}

/// Decode `grid` into a fresh `Vec`, returning nothing unless every row
/// decodes.
pub fn decode_all<R, S>(grid: &[Vec<S>]) -> Result<Vec<R>>
where
    R: Record,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    decode(grid, &mut records)?;
    Ok(records)
}

fn decode_row<R, S>(plan: &[(&BoundField<R>, usize)], row: &[S], row_number: usize) -> Result<R>
where
    R: Record,
    S: AsRef<str>,
{
    let mut record = R::default();

    for &(field, index) in plan {
        let raw = row
            .get(index)
            .ok_or(BindError::RowTooShort {
                row: row_number,
                column: field.column,
                index,
                len: row.len(),
            })?
            .as_ref();

        assign_cell(&field.accessor, &mut record, raw).map_err(|source| {
            BindError::MalformedValue {
                row: row_number,
                field: field.name,
                column: field.column,
                raw: raw.to_string(),
                source,
            }
        })?;
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoercionError;

    crate::record! {
        #[derive(Debug, Default, Clone, PartialEq)]
        struct Pet {
            #[column("name")]
            name: String,
            #[column("age")]
            age: i64,
            nickname: String,
            #[column("has_pet")]
            has_pet: bool,
        }
    }

    fn pet(name: &str, age: i64, has_pet: bool) -> Pet {
        Pet {
            name: name.to_string(),
            age,
            nickname: String::new(),
            has_pet,
        }
    }

    #[test]
    fn test_decode_example_grid() {
        let grid = vec![
            vec!["name", "age", "has_pet"],
            vec!["Jon", "100", "true"],
            vec!["Fred", "42", "false"],
        ];
        let mut pets: Vec<Pet> = Vec::new();
        decode(&grid, &mut pets).unwrap();

        assert_eq!(pets, vec![pet("Jon", 100, true), pet("Fred", 42, false)]);
    }

    #[test]
    fn test_decode_by_name_not_position() {
        let grid = vec![
            vec!["has_pet", "name", "age"],
            vec!["true", "Jon", "100"],
        ];
        let pets: Vec<Pet> = decode_all(&grid).unwrap();
        assert_eq!(pets, vec![pet("Jon", 100, true)]);
    }

    #[test]
    fn test_decode_header_only() {
        let grid = vec![vec!["name", "age", "has_pet"]];
        let mut pets: Vec<Pet> = Vec::new();
        decode(&grid, &mut pets).unwrap();
        assert!(pets.is_empty());
    }

    #[test]
    fn test_decode_without_header_is_invalid() {
        let grid: Vec<Vec<String>> = Vec::new();
        let mut pets: Vec<Pet> = Vec::new();
        let err = decode(&grid, &mut pets).unwrap_err();
        assert!(matches!(err, BindError::InvalidInput(_)));
    }

    #[test]
    fn test_decode_appends_without_clearing() {
        let grid = vec![vec!["name", "age", "has_pet"], vec!["Fred", "42", "false"]];
        let mut pets = vec![pet("Existing", 1, true)];
        decode(&grid, &mut pets).unwrap();

        assert_eq!(pets.len(), 2);
        assert_eq!(pets[0].name, "Existing");
        assert_eq!(pets[1].name, "Fred");
    }

    #[test]
    fn test_missing_column_leaves_default() {
        let grid = vec![vec!["name", "has_pet"], vec!["Jon", "true"]];
        let pets: Vec<Pet> = decode_all(&grid).unwrap();
        assert_eq!(pets[0].age, 0);
        assert!(pets[0].has_pet);
    }

    #[test]
    fn test_unbound_field_is_never_written() {
        let grid = vec![
            vec!["name", "age", "has_pet", "nickname"],
            vec!["Jon", "100", "true", "Jonny"],
        ];
        let pets: Vec<Pet> = decode_all(&grid).unwrap();
        assert_eq!(pets[0].nickname, "");
    }

    #[test]
    fn test_repeated_header_name_reads_last_column() {
        let grid = vec![
            vec!["age", "name", "has_pet", "age"],
            vec!["1", "Jon", "true", "100"],
        ];
        let pets: Vec<Pet> = decode_all(&grid).unwrap();
        assert_eq!(pets, vec![pet("Jon", 100, true)]);
    }

    #[test]
    fn test_repeated_header_name_short_row_names_last_index() {
        let grid = vec![vec!["age", "name", "age"], vec!["1", "Jon"]];
        let err = decode_all::<Pet, _>(&grid).unwrap_err();
        assert!(matches!(
            err,
            BindError::RowTooShort {
                column: "age",
                index: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_extra_cells_are_ignored() {
        let grid = vec![
            vec!["name", "age", "has_pet"],
            vec!["Jon", "100", "true", "surplus"],
        ];
        let pets: Vec<Pet> = decode_all(&grid).unwrap();
        assert_eq!(pets, vec![pet("Jon", 100, true)]);
    }

    #[test]
    fn test_short_row() {
        let grid = vec![vec!["name", "age", "has_pet"], vec!["42"]];
        let mut pets: Vec<Pet> = Vec::new();
        let err = decode(&grid, &mut pets).unwrap_err();

        match err {
            BindError::RowTooShort {
                row,
                column,
                index,
                len,
            } => {
                assert_eq!(row, 1);
                assert_eq!(column, "age");
                assert_eq!(index, 1);
                assert_eq!(len, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(pets.is_empty());
    }

    #[test]
    fn test_malformed_integer() {
        let grid = vec![
            vec!["name", "age", "has_pet"],
            vec!["Jon", "notanumber", "true"],
        ];
        let err = decode_all::<Pet, _>(&grid).unwrap_err();

        match err {
            BindError::MalformedValue {
                row,
                field,
                raw,
                source,
                ..
            } => {
                assert_eq!(row, 1);
                assert_eq!(field, "age");
                assert_eq!(raw, "notanumber");
                assert!(matches!(source, CoercionError::Integer(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_boolean() {
        let grid = vec![vec!["has_pet"], vec!["maybe"]];
        let err = decode_all::<Pet, _>(&grid).unwrap_err();
        assert!(matches!(
            err,
            BindError::MalformedValue {
                field: "has_pet",
                source: CoercionError::Boolean(_),
                ..
            }
        ));
    }

    #[test]
    fn test_failure_keeps_earlier_rows() {
        let grid = vec![
            vec!["name", "age", "has_pet"],
            vec!["Jon", "100", "true"],
            vec!["Fred", "forty-two", "false"],
            vec!["Martha", "37", "true"],
        ];
        let mut pets: Vec<Pet> = Vec::new();
        let err = decode(&grid, &mut pets).unwrap_err();

        assert!(matches!(err, BindError::MalformedValue { row: 2, .. }));
        assert_eq!(pets, vec![pet("Jon", 100, true)]);
    }

    #[test]
    fn test_decode_all_is_all_or_nothing() {
        let grid = vec![
            vec!["name", "age", "has_pet"],
            vec!["Jon", "100", "true"],
            vec!["Fred"],
        ];
        assert!(decode_all::<Pet, _>(&grid).is_err());
    }

    #[test]
    fn test_decode_owned_strings() {
        let grid: Vec<Vec<String>> = vec![
            vec!["name".to_string(), "age".to_string()],
            vec!["Martha".to_string(), "37".to_string()],
        ];
        let pets: Vec<Pet> = decode_all(&grid).unwrap();
        assert_eq!(pets[0].age, 37);
        assert!(!pets[0].has_pet);
    }
}
