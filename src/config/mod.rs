#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_column_names, validate_path, Validate};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "sample_data.csv";
pub const DEFAULT_REPORT_PATH: &str = "fragility_report.txt";
pub const DEFAULT_CRITICAL_COLUMNS: [&str; 3] = ["email", "order_total", "shipping_address"];
pub const DEFAULT_FRICTION_COST_PER_ISSUE: u64 = 50;

/// Everything a scan-and-report run needs. Missing TOML keys take the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub input_path: PathBuf,
    pub report_path: PathBuf,
    pub critical_columns: Vec<String>,
    pub friction_cost_per_issue: u64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            critical_columns: DEFAULT_CRITICAL_COLUMNS
                .iter()
                .map(|column| column.to_string())
                .collect(),
            friction_cost_per_issue: DEFAULT_FRICTION_COST_PER_ISSUE,
        }
    }
}

impl ConfigProvider for ObserverConfig {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn report_path(&self) -> &Path {
        &self.report_path
    }

    fn critical_columns(&self) -> &[String] {
        &self.critical_columns
    }

    fn friction_cost_per_issue(&self) -> u64 {
        self.friction_cost_per_issue
    }
}

impl Validate for ObserverConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path.to_string_lossy())?;
        validate_path("report_path", &self.report_path.to_string_lossy())?;
        validate_column_names("critical_columns", &self.critical_columns)?;
        Ok(())
    }
}
