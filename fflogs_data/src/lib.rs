//! Shared data model for FFLogs world lookups.

pub mod defs;
pub mod table;
pub mod validate;

pub use defs::*;
pub use table::WorldTable;
pub use validate::{TableError, validate_table};
