//! Stockvar report renderer.
//!
//! Main entry point: loads the stock comparison sheet once, runs the
//! variance pipeline, and renders the report to stdout.

mod config;
mod render;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockvar_core::category::CategoryFilter;
use stockvar_core::report::ReportService;
use stockvar_core::variance::VarianceService;

use crate::config::ReportConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockvar=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = ReportConfig::load().context("Failed to load configuration")?;

    // Load the sheet once; the record table is owned here and passed
    // by reference through computation and rendering.
    let raw = stockvar_loader::load_path(&config.input.path)?;
    info!(
        records = raw.len(),
        path = %config.input.path.display(),
        "Loaded stock comparison sheet"
    );

    let records = VarianceService::enrich(raw);
    let filter = CategoryFilter::parse(&config.report.category);
    let report = ReportService::generate(records, &filter, config.report.priority_limit);
    info!(
        priority = report.priority.len(),
        remainder = report.remainder.len(),
        category = report.filter.label(),
        "Report assembled"
    );

    let stdout = std::io::stdout();
    render::render(&report, &config.report.currency, &mut stdout.lock())?;

    Ok(())
}
