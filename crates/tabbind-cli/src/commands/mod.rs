//! CLI command implementations.

pub mod decode;
pub mod header;
pub mod roundtrip;
