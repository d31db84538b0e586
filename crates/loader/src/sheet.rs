//! CSV sheet reader.
//!
//! Column names are matched exactly after whitespace-trimming the
//! header row. `Book Stock`, `Phys Stock`, `Cost Price`, `Category`,
//! and `Item Name` are required; `Item No` and `Barcode` load as empty
//! strings when their columns are absent; `Diff Stock` is optional and
//! only used when present.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;

use stockvar_core::variance::RawStockRecord;

use crate::error::{DataValidationError, LoadError, SchemaError};

/// Required quantity column: system-of-record stock.
pub const COL_BOOK_STOCK: &str = "Book Stock";
/// Required quantity column: physically counted stock.
pub const COL_PHYS_STOCK: &str = "Phys Stock";
/// Required numeric column: unit cost price.
pub const COL_COST_PRICE: &str = "Cost Price";
/// Required identity column.
pub const COL_CATEGORY: &str = "Category";
/// Required identity column.
pub const COL_ITEM_NAME: &str = "Item Name";
/// Optional identity column.
pub const COL_ITEM_NO: &str = "Item No";
/// Optional identity column.
pub const COL_BARCODE: &str = "Barcode";
/// Optional pre-computed difference column.
pub const COL_DIFF_STOCK: &str = "Diff Stock";

/// Resolved header positions for one sheet.
struct ColumnMap {
    category: usize,
    item_name: usize,
    item_no: Option<usize>,
    barcode: Option<usize>,
    book_stock: usize,
    phys_stock: usize,
    cost_price: usize,
    diff_stock: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, SchemaError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| SchemaError {
                column: name.to_string(),
            })
        };

        Ok(Self {
            category: require(COL_CATEGORY)?,
            item_name: require(COL_ITEM_NAME)?,
            item_no: find(COL_ITEM_NO),
            barcode: find(COL_BARCODE),
            book_stock: require(COL_BOOK_STOCK)?,
            phys_stock: require(COL_PHYS_STOCK)?,
            cost_price: require(COL_COST_PRICE)?,
            diff_stock: find(COL_DIFF_STOCK),
        })
    }
}

/// Loads raw stock records from a file path.
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<RawStockRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file)
}

/// Reads raw stock records from any CSV source.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawStockRecord>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);

    let columns = ColumnMap::resolve(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        // Data rows are 1-based, not counting the header.
        records.push(parse_row(&columns, &row, index + 1)?);
    }

    Ok(records)
}

fn parse_row(
    columns: &ColumnMap,
    row: &csv::StringRecord,
    row_number: usize,
) -> Result<RawStockRecord, LoadError> {
    let text = |index: Option<usize>| {
        index
            .and_then(|i| row.get(i))
            .unwrap_or_default()
            .to_string()
    };

    Ok(RawStockRecord {
        item_no: text(columns.item_no),
        item_name: text(Some(columns.item_name)),
        barcode: text(columns.barcode),
        category: text(Some(columns.category)),
        book_stock: parse_decimal(row, columns.book_stock, COL_BOOK_STOCK, row_number)?,
        phys_stock: parse_decimal(row, columns.phys_stock, COL_PHYS_STOCK, row_number)?,
        cost_price: parse_decimal(row, columns.cost_price, COL_COST_PRICE, row_number)?,
        diff_stock: parse_optional_decimal(row, columns.diff_stock, COL_DIFF_STOCK, row_number)?,
    })
}

fn parse_decimal(
    row: &csv::StringRecord,
    index: usize,
    column: &str,
    row_number: usize,
) -> Result<Decimal, DataValidationError> {
    let raw = row.get(index).unwrap_or_default();
    raw.trim().parse().map_err(|_| DataValidationError {
        column: column.to_string(),
        row: row_number,
        value: raw.to_string(),
    })
}

fn parse_optional_decimal(
    row: &csv::StringRecord,
    index: Option<usize>,
    column: &str,
    row_number: usize,
) -> Result<Option<Decimal>, DataValidationError> {
    let Some(index) = index else {
        return Ok(None);
    };
    let raw = row.get(index).unwrap_or_default();
    if raw.trim().is_empty() {
        // An empty cell counts as absent, not invalid.
        return Ok(None);
    }
    parse_decimal(row, index, column, row_number).map(Some)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    const SHEET: &str = "\
Category,Item Name,Item No,Barcode,Book Stock,Phys Stock,Cost Price
Beverages,Green Tea,I-001,6291001,10,7,5
Snacks,Dates Box,I-002,6291002,0,3,2
";

    #[test]
    fn test_reads_all_rows() {
        let records = read_records(SHEET.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, "Beverages");
        assert_eq!(records[0].item_name, "Green Tea");
        assert_eq!(records[0].book_stock, dec!(10));
        assert_eq!(records[0].phys_stock, dec!(7));
        assert_eq!(records[0].cost_price, dec!(5));
        assert_eq!(records[0].diff_stock, None);
        assert_eq!(records[1].item_no, "I-002");
    }

    #[test]
    fn test_headers_trimmed_before_matching() {
        let sheet = "\
 Category , Item Name ,Book Stock , Phys Stock,Cost Price
Beverages,Green Tea,1,2,3
";
        let records = read_records(sheet.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].book_stock, dec!(1));
        // Absent identity columns load as empty strings.
        assert_eq!(records[0].item_no, "");
        assert_eq!(records[0].barcode, "");
    }

    #[test]
    fn test_carried_diff_stock_column() {
        let sheet = "\
Category,Item Name,Book Stock,Phys Stock,Cost Price,Diff Stock
Beverages,Green Tea,10,7,5,-3
Beverages,Black Tea,10,7,5,
";
        let records = read_records(sheet.as_bytes()).unwrap();

        assert_eq!(records[0].diff_stock, Some(dec!(-3)));
        // Empty cell counts as absent.
        assert_eq!(records[1].diff_stock, None);
    }

    #[rstest]
    #[case(COL_BOOK_STOCK)]
    #[case(COL_PHYS_STOCK)]
    #[case(COL_COST_PRICE)]
    #[case(COL_CATEGORY)]
    #[case(COL_ITEM_NAME)]
    fn test_missing_required_column(#[case] missing: &str) {
        let headers: Vec<&str> = [
            COL_CATEGORY,
            COL_ITEM_NAME,
            COL_BOOK_STOCK,
            COL_PHYS_STOCK,
            COL_COST_PRICE,
        ]
        .into_iter()
        .filter(|&h| h != missing)
        .collect();
        let sheet = format!("{}\n", headers.join(","));

        let err = read_records(sheet.as_bytes()).unwrap_err();

        match err {
            LoadError::Schema(schema) => assert_eq!(schema.column, missing),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_value_names_column_and_row() {
        let sheet = "\
Category,Item Name,Book Stock,Phys Stock,Cost Price
Beverages,Green Tea,10,7,5
Beverages,Black Tea,10,seven,5
";
        let err = read_records(sheet.as_bytes()).unwrap_err();

        match err {
            LoadError::Validation(validation) => {
                assert_eq!(validation.column, COL_PHYS_STOCK);
                assert_eq!(validation.row, 2);
                assert_eq!(validation.value, "seven");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_fractional_and_negative_quantities() {
        let sheet = "\
Category,Item Name,Book Stock,Phys Stock,Cost Price
Beverages,Loose Tea,2.5,-1.75,4.20
";
        let records = read_records(sheet.as_bytes()).unwrap();

        assert_eq!(records[0].book_stock, dec!(2.5));
        assert_eq!(records[0].phys_stock, dec!(-1.75));
        assert_eq!(records[0].cost_price, dec!(4.20));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let err = load_path("does-not-exist.csv").unwrap_err();
        assert!(matches!(err, LoadError::FileUnreadable { .. }));
    }
}
