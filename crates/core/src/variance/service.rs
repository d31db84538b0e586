//! Enrichment and aggregation over stock records.

use rust_decimal::Decimal;

use super::types::{RawStockRecord, StockRecord, StockTotals};

/// Service for deriving and aggregating stock variances.
pub struct VarianceService;

impl VarianceService {
    /// Enriches raw rows with derived columns.
    ///
    /// Fills `diff_stock` as `phys_stock - book_stock` when the source
    /// sheet did not carry it, then recomputes the three value columns
    /// unconditionally.
    #[must_use]
    pub fn enrich(records: Vec<RawStockRecord>) -> Vec<StockRecord> {
        records.into_iter().map(Self::enrich_one).collect()
    }

    /// Enriches a single raw row.
    #[must_use]
    pub fn enrich_one(raw: RawStockRecord) -> StockRecord {
        let diff_stock = raw
            .diff_stock
            .unwrap_or(raw.phys_stock - raw.book_stock);

        StockRecord {
            book_value: raw.book_stock * raw.cost_price,
            phys_value: raw.phys_stock * raw.cost_price,
            diff_value: diff_stock * raw.cost_price,
            diff_stock,
            item_no: raw.item_no,
            item_name: raw.item_name,
            barcode: raw.barcode,
            category: raw.category,
            book_stock: raw.book_stock,
            phys_stock: raw.phys_stock,
            cost_price: raw.cost_price,
        }
    }

    /// Sums quantities and values across a record set.
    ///
    /// The variance percentage is `(total diff / total book) * 100`,
    /// rounded to two decimal places, and defined as zero when total
    /// book stock is zero.
    #[must_use]
    pub fn aggregate(records: &[StockRecord]) -> StockTotals {
        let book_stock: Decimal = records.iter().map(|r| r.book_stock).sum();
        let phys_stock: Decimal = records.iter().map(|r| r.phys_stock).sum();
        let diff_stock: Decimal = records.iter().map(|r| r.diff_stock).sum();
        let book_value: Decimal = records.iter().map(|r| r.book_value).sum();
        let phys_value: Decimal = records.iter().map(|r| r.phys_value).sum();
        let diff_value: Decimal = records.iter().map(|r| r.diff_value).sum();

        let variance_percent = if book_stock.is_zero() {
            Decimal::ZERO
        } else {
            ((diff_stock / book_stock) * Decimal::ONE_HUNDRED).round_dp(2)
        };

        StockTotals {
            book_stock,
            phys_stock,
            diff_stock,
            book_value,
            phys_value,
            diff_value,
            variance_percent,
        }
    }
}
