//! Core variance computation for Stockvar.
//!
//! This crate contains pure computation with ZERO file or terminal
//! dependencies. All record types, derivation rules, and aggregation
//! logic live here.
//!
//! # Modules
//!
//! - `variance` - Record enrichment and aggregate totals
//! - `category` - Category filtering for report scoping
//! - `report` - Priority ordering and report assembly

pub mod category;
pub mod report;
pub mod variance;
