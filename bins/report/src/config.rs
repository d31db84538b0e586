//! Report configuration management.

use std::path::PathBuf;

use serde::Deserialize;
use stockvar_core::report::DEFAULT_PRIORITY_LIMIT;

/// Report configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Input configuration.
    #[serde(default)]
    pub input: InputConfig,
    /// Report options.
    #[serde(default)]
    pub report: ReportOptions,
}

/// Input configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Path to the stock comparison CSV export.
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from("stock_comparison.csv")
}

/// Report options.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportOptions {
    /// Size of the priority set.
    #[serde(default = "default_priority_limit")]
    pub priority_limit: usize,
    /// Currency label for value formatting.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Category scope; the sentinel "All" matches every record.
    #[serde(default = "default_category")]
    pub category: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            priority_limit: default_priority_limit(),
            currency: default_currency(),
            category: default_category(),
        }
    }
}

fn default_priority_limit() -> usize {
    DEFAULT_PRIORITY_LIMIT
}

fn default_currency() -> String {
    "AED".to_string()
}

fn default_category() -> String {
    stockvar_core::category::ALL_CATEGORIES.to_string()
}

impl ReportConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("STOCKVAR").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();

        assert_eq!(config.input.path, PathBuf::from("stock_comparison.csv"));
        assert_eq!(config.report.priority_limit, 30);
        assert_eq!(config.report.currency, "AED");
        assert_eq!(config.report.category, "All");
    }
}
