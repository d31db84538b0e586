//! Report generation service.

use rust_decimal::Decimal;

use super::types::{Prioritized, VarianceReport};
use crate::category::CategoryFilter;
use crate::variance::{StockRecord, VarianceService};

/// Service for assembling variance reports.
pub struct ReportService;

impl ReportService {
    /// Splits records into the priority set and its complement.
    ///
    /// Shortages (diff > 0) come first, sorted descending by stock
    /// difference; excess (diff < 0) follows, sorted ascending so the
    /// largest magnitude surfaces first. The first `limit` of that
    /// ordering form the priority set. Zero-difference records belong
    /// to neither partition and always land in the remainder, as does
    /// any overflow past the limit. Sorts are stable, so ties keep
    /// original input order.
    #[must_use]
    pub fn prioritize(records: Vec<StockRecord>, limit: usize) -> Prioritized {
        let mut shortages = Vec::new();
        let mut excess = Vec::new();
        let mut remainder = Vec::new();

        for record in records {
            if record.diff_stock > Decimal::ZERO {
                shortages.push(record);
            } else if record.diff_stock < Decimal::ZERO {
                excess.push(record);
            } else {
                remainder.push(record);
            }
        }

        shortages.sort_by(|a, b| b.diff_stock.cmp(&a.diff_stock));
        excess.sort_by(|a, b| a.diff_stock.cmp(&b.diff_stock));

        let mut priority: Vec<StockRecord> = shortages.into_iter().chain(excess).collect();
        let overflow = priority.split_off(limit.min(priority.len()));
        remainder.extend(overflow);

        Prioritized {
            priority,
            remainder,
        }
    }

    /// Generates the full variance report for one category scope.
    ///
    /// Filters, aggregates, prioritizes, and sorts the remainder by
    /// category ascending then stock difference descending.
    #[must_use]
    pub fn generate(
        records: Vec<StockRecord>,
        filter: &CategoryFilter,
        limit: usize,
    ) -> VarianceReport {
        let filtered = filter.apply(records);
        let summary = VarianceService::aggregate(&filtered);
        let Prioritized {
            priority,
            mut remainder,
        } = Self::prioritize(filtered, limit);

        remainder.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| b.diff_stock.cmp(&a.diff_stock))
        });

        VarianceReport {
            report_type: "stock_variance".to_string(),
            as_of: chrono::Utc::now().date_naive(),
            filter: filter.clone(),
            summary,
            priority,
            remainder,
        }
    }
}
