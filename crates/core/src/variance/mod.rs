//! Stock record enrichment and aggregate totals.

pub mod service;
pub mod types;


pub use service::VarianceService;
pub use types::{RawStockRecord, StockRecord, StockTotals, VarianceDirection};
