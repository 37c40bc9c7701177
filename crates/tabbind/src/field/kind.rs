//! Primitive kinds a bound field can hold.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive kind of a bound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Text, copied through unchanged.
    String,
    /// Signed 64-bit integer, base 10.
    Integer,
    /// 64-bit float.
    Float,
    /// `true` / `false`.
    Boolean,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Typed getter/setter pair for one field of a record `R`.
///
/// One variant per [`FieldKind`]; the binder matches on it exhaustively, so a
/// new kind is added here and nowhere else compiles until it is handled.
pub enum Accessor<R> {
    String {
        get: fn(&R) -> &String,
        set: fn(&mut R, String),
    },
    Integer {
        get: fn(&R) -> &i64,
        set: fn(&mut R, i64),
    },
    Float {
        get: fn(&R) -> &f64,
        set: fn(&mut R, f64),
    },
    Boolean {
        get: fn(&R) -> &bool,
        set: fn(&mut R, bool),
    },
}

impl<R> Accessor<R> {
    /// The primitive kind this accessor reads and writes.
    pub fn kind(&self) -> FieldKind {
        match self {
            Accessor::String { .. } => FieldKind::String,
            Accessor::Integer { .. } => FieldKind::Integer,
            Accessor::Float { .. } => FieldKind::Float,
            Accessor::Boolean { .. } => FieldKind::Boolean,
        }
    }
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Accessor<R> {}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Accessor").field(&self.kind()).finish()
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
}

/// Rust types that can back a bound field.
///
/// Sealed: the set is exactly the types with an [`Accessor`] variant.
pub trait Primitive: sealed::Sealed + Sized {
    /// Kind of values of this type.
    const KIND: FieldKind;

    /// Wrap a getter/setter pair in the matching [`Accessor`] variant.
    fn accessor<R>(get: fn(&R) -> &Self, set: fn(&mut R, Self)) -> Accessor<R>;
}

impl Primitive for String {
    const KIND: FieldKind = FieldKind::String;

    fn accessor<R>(get: fn(&R) -> &Self, set: fn(&mut R, Self)) -> Accessor<R> {
        Accessor::String { get, set }
    }
}

impl Primitive for i64 {
    const KIND: FieldKind = FieldKind::Integer;

    fn accessor<R>(get: fn(&R) -> &Self, set: fn(&mut R, Self)) -> Accessor<R> {
        Accessor::Integer { get, set }
    }
}

impl Primitive for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn accessor<R>(get: fn(&R) -> &Self, set: fn(&mut R, Self)) -> Accessor<R> {
        Accessor::Float { get, set }
    }
}

impl Primitive for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn accessor<R>(get: fn(&R) -> &Self, set: fn(&mut R, Self)) -> Accessor<R> {
        Accessor::Boolean { get, set }
    }
}
