//! Stock comparison sheet ingestion for Stockvar.
//!
//! Reads the CSV export of a stock comparison sheet into raw records
//! for the core pipeline. The whole load is a single pass: the first
//! schema or value error aborts it, there is no per-row
//! skip-and-continue.

pub mod error;
pub mod sheet;

pub use error::{DataValidationError, LoadError, SchemaError};
pub use sheet::{load_path, read_records};
