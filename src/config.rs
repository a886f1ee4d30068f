//! Configuration loader and schema types.
//!
//! Settings control how generated names are padded and how the target
//! directory is walked. Everything is optional; defaults match the CLI.

mod load;
mod schema;

pub use schema::*;
