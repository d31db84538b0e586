//! Category filtering for report scoping.

pub mod filter;

pub use filter::{ALL_CATEGORIES, CategoryFilter, distinct_categories};
