//! Report data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::CategoryFilter;
use crate::variance::{StockRecord, StockTotals};

/// Default size of the priority set.
pub const DEFAULT_PRIORITY_LIMIT: usize = 30;

/// Records split into a priority set and its complement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prioritized {
    /// The largest discrepancies: shortages sorted descending by stock
    /// difference, then excess sorted most-negative-first, capped at
    /// the requested limit.
    pub priority: Vec<StockRecord>,
    /// Everything else: every zero-difference record plus any overflow
    /// past the priority limit.
    pub remainder: Vec<StockRecord>,
}

/// Full variance report over one filtered record set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarianceReport {
    /// Report type identifier.
    pub report_type: String,
    /// Generation date.
    pub as_of: NaiveDate,
    /// Category filter the report was scoped to.
    pub filter: CategoryFilter,
    /// Aggregate totals over the filtered set.
    pub summary: StockTotals,
    /// Priority records for charting and the priority table.
    pub priority: Vec<StockRecord>,
    /// Remaining records, sorted by category ascending then stock
    /// difference descending.
    pub remainder: Vec<StockRecord>,
}
