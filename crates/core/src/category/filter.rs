//! Category filter with an "All" sentinel.

use serde::{Deserialize, Serialize};

use crate::variance::StockRecord;

/// Sentinel category label matching every record.
pub const ALL_CATEGORIES: &str = "All";

/// Filter scoping a report to one category, or to all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Match every record.
    #[default]
    All,
    /// Match records whose category equals the given label exactly.
    Only(String),
}

impl CategoryFilter {
    /// Parses a filter label, treating the `All` sentinel as the
    /// identity filter.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    /// Returns true when the record passes the filter.
    #[must_use]
    pub fn matches(&self, record: &StockRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => record.category == *category,
        }
    }

    /// Applies the filter, keeping input order.
    ///
    /// An empty result is not an error; a category with no records
    /// simply yields an empty set.
    #[must_use]
    pub fn apply(&self, records: Vec<StockRecord>) -> Vec<StockRecord> {
        match self {
            Self::All => records,
            Self::Only(_) => records.into_iter().filter(|r| self.matches(r)).collect(),
        }
    }

    /// Label for display, using the sentinel for the identity filter.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }
}

/// Collects the distinct categories present in a record set, in first
/// appearance order.
#[must_use]
pub fn distinct_categories(records: &[StockRecord]) -> Vec<String> {
    let mut seen = Vec::new();
    for record in records {
        if !seen.contains(&record.category) {
            seen.push(record.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    fn record(category: &str) -> StockRecord {
        StockRecord {
            item_no: String::new(),
            item_name: String::new(),
            barcode: String::new(),
            category: category.to_string(),
            book_stock: dec!(1),
            phys_stock: dec!(1),
            cost_price: dec!(1),
            diff_stock: dec!(0),
            book_value: dec!(1),
            phys_value: dec!(1),
            diff_value: dec!(0),
        }
    }

    #[rstest]
    #[case("All", CategoryFilter::All)]
    #[case("Beverages", CategoryFilter::Only("Beverages".to_string()))]
    #[case("all", CategoryFilter::Only("all".to_string()))]
    fn test_parse(#[case] label: &str, #[case] expected: CategoryFilter) {
        assert_eq!(CategoryFilter::parse(label), expected);
    }

    #[test]
    fn test_all_is_identity() {
        let records = vec![record("A"), record("B"), record("A")];
        let filtered = CategoryFilter::All.apply(records.clone());
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_only_exact_match() {
        let records = vec![record("A"), record("B"), record("A")];
        let filtered = CategoryFilter::parse("A").apply(records);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.category == "A"));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let records = vec![record("A")];
        let filtered = CategoryFilter::parse("Missing").apply(records);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_distinct_categories_first_appearance_order() {
        let records = vec![record("B"), record("A"), record("B"), record("C")];
        assert_eq!(distinct_categories(&records), vec!["B", "A", "C"]);
    }
}
