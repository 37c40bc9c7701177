//! Encoding records to grids and decoding grids to records.

mod coerce;
mod decode;
mod encode;
mod header;

pub use coerce::parse_bool;
pub use decode::{decode, decode_all};
pub use encode::encode;
pub use header::HeaderIndex;

/// Rows of text cells; row 0 is the header.
pub type Grid = Vec<Vec<String>>;
