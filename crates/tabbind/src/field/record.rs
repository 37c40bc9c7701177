//! The `Record` trait and the `record!` macro that implements it.

use std::fmt;

use super::kind::{Accessor, FieldKind};

/// One declared field of a record shape.
pub struct Field<R> {
    /// Field identity, normally the Rust field name.
    pub name: &'static str,
    /// Column tag; `None` keeps the field out of binding.
    pub column: Option<&'static str>,
    /// Typed getter/setter.
    pub accessor: Accessor<R>,
}

impl<R> Field<R> {
    /// Create a field with an optional column tag.
    pub fn new(name: &'static str, column: Option<&'static str>, accessor: Accessor<R>) -> Self {
        Self {
            name,
            column,
            accessor,
        }
    }

    /// Create a field bound to `column`.
    pub fn bound(name: &'static str, column: &'static str, accessor: Accessor<R>) -> Self {
        Self::new(name, Some(column), accessor)
    }

    /// Create a field that takes no part in binding.
    pub fn unbound(name: &'static str, accessor: Accessor<R>) -> Self {
        Self::new(name, None, accessor)
    }

    /// Primitive kind of the field.
    pub fn kind(&self) -> FieldKind {
        self.accessor.kind()
    }
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Field<R> {}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("column", &self.column)
            .field("kind", &self.kind())
            .finish()
    }
}


/// A record shape that can be bound to grid rows.
///
/// `Default` supplies the zero value a decoded record starts from, and is
/// the only thing an untagged field is ever given. Most shapes are declared
/// with [`record!`](crate::record) rather than by hand.
pub trait Record: Default {
    /// Shape name used in diagnostics.
    const NAME: &'static str;

    /// Fields in declaration order.
    ///
    /// Untagged fields may be listed with [`Field::unbound`] or left out;
    /// either way they take no part in binding.
    fn fields() -> Vec<Field<Self>>;
}

/// Declare a struct and implement [`Record`] for it.
///
/// Fields marked `#[column("...")]` are bound to that column and must have a
/// [`Primitive`](crate::Primitive) type. Unmarked fields can be of any type
/// and are left out of [`Record::fields`], so encode and decode never touch
/// them. Other field attributes, doc comments included, are kept on the
/// struct. The struct must implement `Default`.
///
/// ```
/// tabbind::record! {
///     #[derive(Debug, Default)]
///     pub struct Sample {
///         /// Accession of the sample.
///         #[column("sample_id")]
///         pub id: String,
///         #[column("reads")]
///         pub reads: i64,
///         pub tags: Vec<String>,
///     }
/// }
///
/// use tabbind::Record;
/// let fields = Sample::fields();
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields[1].column, Some("reads"));
/// ```
#[macro_export]
macro_rules! record {
    // Two `#[column]` attributes on one field.
    (
        @munch [$($meta:tt)*] [$vis:vis] [$name:ident]
        fields: [$($fields:tt)*]
        bound: [$($bound:tt)*]
        attrs: [$($attrs:tt)*]
        tag: [$old:literal]
        rest: [#[column($tag:literal)] $($rest:tt)*]
    ) => {
        ::core::compile_error!(::core::concat!(
            "field has more than one #[column] attribute: ",
            $old,
            ", ",
            $tag
        ));
    };
    (
        @munch [$($meta:tt)*] [$vis:vis] [$name:ident]
        fields: [$($fields:tt)*]
        bound: [$($bound:tt)*]
        attrs: [$($attrs:tt)*]
        tag: []
        rest: [#[column($tag:literal)] $($rest:tt)*]
    ) => {
        $crate::record! {
            @munch [$($meta)*] [$vis] [$name]
            fields: [$($fields)*]
            bound: [$($bound)*]
            attrs: [$($attrs)*]
            tag: [$tag]
            rest: [$($rest)*]
        }
    };
    (
        @munch [$($meta:tt)*] [$vis:vis] [$name:ident]
        fields: [$($fields:tt)*]
        bound: [$($bound:tt)*]
        attrs: [$($attrs:tt)*]
        tag: [$($tag:literal)?]
        rest: [#[$($attr:tt)*] $($rest:tt)*]
    ) => {
        $crate::record! {
            @munch [$($meta)*] [$vis] [$name]
            fields: [$($fields)*]
            bound: [$($bound)*]
            attrs: [$($attrs)* #[$($attr)*]]
            tag: [$($tag)?]
            rest: [$($rest)*]
        }
    };
    (
        @munch [$($meta:tt)*] [$vis:vis] [$name:ident]
        fields: [$($fields:tt)*]
        bound: [$($bound:tt)*]
        attrs: [$($attrs:tt)*]
        tag: [$($tag:literal)?]
        rest: [$field_vis:vis $field:ident : $ty:ty $(, $($rest:tt)*)?]
    ) => {
        $crate::record! {
            @munch [$($meta)*] [$vis] [$name]
            fields: [$($fields)* $($attrs)* $field_vis $field: $ty,]
            bound: [
                $($bound)*
                $(
                    $crate::Field::bound(
                        ::core::stringify!($field),
                        $tag,
                        <$ty as $crate::Primitive>::accessor::<$name>(
                            |record| &record.$field,
                            |record, value| record.$field = value,
                        ),
                    ),
                )?
            ]
            attrs: []
            tag: []
            rest: [$($($rest)*)?]
        }
    };
    (
        @munch [$($meta:tt)*] [$vis:vis] [$name:ident]
        fields: [$($fields:tt)*]
        bound: [$($bound:tt)*]
        attrs: []
        tag: []
        rest: []
    ) => {
        $($meta)*
        $vis struct $name {
            $($fields)*
        }

        impl $crate::Record for $name {
            const NAME: &'static str = ::core::stringify!($name);

            fn fields() -> ::std::vec::Vec<$crate::Field<Self>> {
                ::std::vec![$($bound)*]
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::record! {
            @munch [$(#[$meta])*] [$vis] [$name]
            fields: []
            bound: []
            attrs: []
            tag: []
            rest: [$($body)*]
        }
    };
}
