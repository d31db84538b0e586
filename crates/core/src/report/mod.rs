//! Priority ordering and variance report assembly.
//!
//! This module turns an enriched record set into the artifact the
//! presentation layer consumes:
//! - aggregate summary totals
//! - the priority set (largest shortages, then largest excess)
//! - the remainder set for tabular display

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::{DEFAULT_PRIORITY_LIMIT, Prioritized, VarianceReport};
