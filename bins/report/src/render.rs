//! Terminal rendering for the variance report.
//!
//! Thin presentation over an assembled `VarianceReport`: a summary
//! block, an ASCII bar chart of the priority set, and two tables.

use std::io::{self, Write};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use stockvar_core::report::VarianceReport;
use stockvar_core::variance::StockRecord;

const BAR_WIDTH: u32 = 40;
const NAME_WIDTH: usize = 28;

/// Renders the full report to the given writer.
pub fn render(
    report: &VarianceReport,
    currency: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        out,
        "Stock Variance Report - {} (category: {})",
        report.as_of,
        report.filter.label()
    )?;
    writeln!(out)?;

    render_summary(report, currency, out)?;
    render_priority_chart(&report.priority, out)?;
    render_table(
        &format!("Top {} Items Details (Stock Difference Priority)", report.priority.len()),
        &report.priority,
        out,
    )?;
    render_table("Remaining Items", &report.remainder, out)?;

    Ok(())
}

fn render_summary(
    report: &VarianceReport,
    currency: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    let summary = &report.summary;

    writeln!(out, "=== Stock Summary ===")?;
    writeln!(
        out,
        "{:<18} {:>14}   {currency} {}",
        "System Stock",
        qty(summary.book_stock),
        money(summary.book_value)
    )?;
    writeln!(
        out,
        "{:<18} {:>14}   {currency} {}",
        "Physical Stock",
        qty(summary.phys_stock),
        money(summary.phys_value)
    )?;
    writeln!(
        out,
        "{:<18} {:>14}   {currency} {}",
        "Stock Difference",
        qty(summary.diff_stock),
        money(summary.diff_value)
    )?;
    writeln!(
        out,
        "{:<18} {:>14} %",
        "Stock Variance %", summary.variance_percent
    )?;
    writeln!(out)?;

    Ok(())
}

fn render_priority_chart(priority: &[StockRecord], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Priority by Stock Difference ===")?;

    if priority.is_empty() {
        writeln!(out, "(no discrepancies)")?;
        writeln!(out)?;
        return Ok(());
    }

    let max_abs = priority
        .iter()
        .map(|r| r.diff_stock.abs())
        .max()
        .unwrap_or(Decimal::ONE);

    for record in priority {
        let bar = bar_for(record.diff_stock, max_abs);
        writeln!(
            out,
            "{:<28} {:>10} {}",
            truncate(&record.item_name, NAME_WIDTH),
            qty(record.diff_stock),
            bar
        )?;
    }
    writeln!(out)?;

    Ok(())
}

fn render_table(title: &str, records: &[StockRecord], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== {title} ===")?;
    writeln!(
        out,
        "{:<14} {:<28} {:<10} {:<14} {:>10} {:>10} {:>10} {:>12} {:>12} {:>12}",
        "Category",
        "Item Name",
        "Item No",
        "Barcode",
        "Book Stock",
        "Phys Stock",
        "Diff Stock",
        "Book Value",
        "Phys Value",
        "Diff Value",
    )?;

    for record in records {
        writeln!(
            out,
            "{:<14} {:<28} {:<10} {:<14} {:>10} {:>10} {:>10} {:>12} {:>12} {:>12}",
            truncate(&record.category, 14),
            truncate(&record.item_name, NAME_WIDTH),
            truncate(&record.item_no, 10),
            truncate(&record.barcode, 14),
            qty(record.book_stock),
            qty(record.phys_stock),
            qty(record.diff_stock),
            money(record.book_value),
            money(record.phys_value),
            money(record.diff_value),
        )?;
    }
    writeln!(out)?;

    Ok(())
}

/// Bar scaled to the largest absolute difference; `+` marks shortages,
/// `-` marks excess.
fn bar_for(diff: Decimal, max_abs: Decimal) -> String {
    let length = (diff.abs() * Decimal::from(BAR_WIDTH) / max_abs)
        .ceil()
        .to_usize()
        .unwrap_or(0);

    let glyph = if diff > Decimal::ZERO { '+' } else { '-' };
    std::iter::repeat_n(glyph, length).collect()
}

fn qty(value: Decimal) -> String {
    value.normalize().to_string()
}

fn money(value: Decimal) -> String {
    value.round_dp(0).normalize().to_string()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(2)).collect();
        cut.push_str("..");
        cut
    }
}
