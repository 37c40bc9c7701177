//! Record shapes and the descriptor tables resolved from them.

mod kind;
mod record;
mod table;

pub use kind::{Accessor, FieldKind, Primitive};
pub use record::{Field, Record};
pub use table::{BoundField, DescriptorTable};
