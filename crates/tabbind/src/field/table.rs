//! Descriptor tables: the bound fields of a shape, in declaration order.

use std::collections::HashSet;
use std::fmt;

use super::kind::{Accessor, FieldKind};
use super::record::{Field, Record};
use crate::error::{BindError, Result};

/// A field that carries a column tag.
pub struct BoundField<R> {
    /// Field identity.
    pub name: &'static str,
    /// Column the field is bound to.
    pub column: &'static str,
    /// Typed getter/setter.
    pub accessor: Accessor<R>,
}

impl<R> BoundField<R> {
    /// Primitive kind of the field.
    pub fn kind(&self) -> FieldKind {
        self.accessor.kind()
    }
}

impl<R> fmt::Debug for BoundField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundField")
            .field("name", &self.name)
            .field("column", &self.column)
            .field("kind", &self.kind())
            .finish()
    }
}

/// Ordered bound fields of one record shape.
///
/// Built fresh for every encode/decode call; nothing is cached between calls.
pub struct DescriptorTable<R> {
    shape: &'static str,
    fields: Vec<BoundField<R>>,
}

impl<R: Record> DescriptorTable<R> {
    /// Resolve the table for `R` from its declared fields.
    pub fn resolve() -> Result<Self> {
        Self::from_fields(R::NAME, R::fields())
    }
}

impl<R> DescriptorTable<R> {
    /// Build a table from declared fields, dropping untagged ones.
    ///
    /// Fails with [`BindError::InvalidInput`] if a tag is empty or two fields
    /// share a tag.
    pub fn from_fields(shape: &'static str, fields: Vec<Field<R>>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut bound = Vec::with_capacity(fields.len());

        for field in fields {
            let Some(column) = field.column else {
                continue;
            };

            if column.is_empty() {
                return Err(BindError::InvalidInput(format!(
                    "{}.{} has an empty column tag",
                    shape, field.name
                )));
            }

            if !seen.insert(column) {
                return Err(BindError::InvalidInput(format!(
                    "{} binds column '{}' more than once (again on field '{}')",
                    shape, column, field.name
                )));
            }

            bound.push(BoundField {
                name: field.name,
                column,
                accessor: field.accessor,
            });
        }

        Ok(Self {
            shape,
            fields: bound,
        })
    }

    /// Name of the record shape.
    pub fn shape(&self) -> &'static str {
        self.shape
    }

    /// Column tags in declaration order.
    pub fn header(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.column.to_string()).collect()
    }

    /// Number of bound fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Bound fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &BoundField<R>> {
        self.fields.iter()
    }

    /// Look up the field bound to `column`.
    pub fn get(&self, column: &str) -> Option<&BoundField<R>> {
        self.fields.iter().find(|f| f.column == column)
    }
}

impl<R> fmt::Debug for DescriptorTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorTable")
            .field("shape", &self.shape)
            .field("fields", &self.fields)
            .finish()
    }
}
