//! Stock record data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A raw stock comparison row as loaded from the source sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStockRecord {
    /// Item number.
    pub item_no: String,
    /// Item name.
    pub item_name: String,
    /// Barcode.
    pub barcode: String,
    /// Category.
    pub category: String,
    /// Quantity recorded in the system of record.
    pub book_stock: Decimal,
    /// Quantity counted by physical audit.
    pub phys_stock: Decimal,
    /// Unit cost price.
    pub cost_price: Decimal,
    /// Stock difference, when the source sheet already carries it.
    pub diff_stock: Option<Decimal>,
}

/// An enriched stock record with derived value columns.
///
/// Immutable once derived; every downstream operation takes these by
/// reference or by value and returns new output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Item number.
    pub item_no: String,
    /// Item name.
    pub item_name: String,
    /// Barcode.
    pub barcode: String,
    /// Category.
    pub category: String,
    /// Quantity recorded in the system of record.
    pub book_stock: Decimal,
    /// Quantity counted by physical audit.
    pub phys_stock: Decimal,
    /// Unit cost price.
    pub cost_price: Decimal,
    /// Physical minus book quantity.
    pub diff_stock: Decimal,
    /// Book stock valued at cost.
    pub book_value: Decimal,
    /// Physical stock valued at cost.
    pub phys_value: Decimal,
    /// Stock difference valued at cost.
    pub diff_value: Decimal,
}

impl StockRecord {
    /// Classifies the record by the sign of its stock difference.
    #[must_use]
    pub fn direction(&self) -> VarianceDirection {
        if self.diff_stock > Decimal::ZERO {
            VarianceDirection::Shortage
        } else if self.diff_stock < Decimal::ZERO {
            VarianceDirection::Excess
        } else {
            VarianceDirection::None
        }
    }
}

/// Direction of a stock variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceDirection {
    /// Physical count exceeds book stock.
    Shortage,
    /// Physical count falls short of book stock.
    Excess,
    /// Counts match.
    None,
}

/// Aggregate totals over a set of stock records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockTotals {
    /// Total book stock quantity.
    pub book_stock: Decimal,
    /// Total physical stock quantity.
    pub phys_stock: Decimal,
    /// Total stock difference.
    pub diff_stock: Decimal,
    /// Total book value.
    pub book_value: Decimal,
    /// Total physical value.
    pub phys_value: Decimal,
    /// Total difference value.
    pub diff_value: Decimal,
    /// Aggregate difference as a percentage of aggregate book stock.
    pub variance_percent: Decimal,
}
