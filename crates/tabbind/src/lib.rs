//! tabbind: bind tabular text grids to strongly-typed record collections.
//!
//! A grid is a header row followed by data rows of text cells, the shape a
//! delimited-text reader produces. A record shape lists its fields through the
//! [`Record`] trait; fields carrying a column tag are bound to the column of
//! the same name, everything else is left alone.
//!
//! # Example
//!
//! ```
//! tabbind::record! {
//!     #[derive(Debug, Default, Clone, PartialEq)]
//!     pub struct Pet {
//!         #[column("name")]
//!         pub name: String,
//!         #[column("age")]
//!         pub age: i64,
//!         #[column("has_pet")]
//!         pub has_pet: bool,
//!     }
//! }
//!
//! let grid = vec![
//!     vec!["name", "age", "has_pet"],
//!     vec!["Jon", "100", "true"],
//!     vec!["Fred", "42", "false"],
//! ];
//!
//! let mut pets: Vec<Pet> = Vec::new();
//! tabbind::decode(&grid, &mut pets).unwrap();
//! assert_eq!(pets[0].age, 100);
//!
//! let out = tabbind::encode(&pets).unwrap();
//! assert_eq!(out[0], vec!["name", "age", "has_pet"]);
//! assert_eq!(out[2], vec!["Fred", "42", "false"]);
//! ```

pub mod binder;
pub mod error;
pub mod field;
pub mod grid;

pub use binder::{decode, decode_all, encode, Grid, HeaderIndex};
pub use error::{BindError, CoercionError, Result};
pub use field::{Accessor, BoundField, DescriptorTable, Field, FieldKind, Primitive, Record};
pub use grid::{
    read_grid, read_path, read_records, write_grid, write_path, write_records, DelimitedGrid,
    GridConfig,
};
