use crate::core::{ConfigProvider, Issue, Result, ScanResult, Storage};
use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;

const RULE_WIDTH: usize = 50;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders scan findings into the plain-text fragility report.
pub struct Reporter<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> Reporter<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn render(&self, issues: &[Issue], generated_at: NaiveDateTime) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        out.push_str(&format!("{}\n", rule));
        out.push_str("LOGICFLOW SYSTEMS: FRAGILITY REPORT\n");
        out.push_str(&format!("Generated: {}\n", generated_at.format(TIMESTAMP_FORMAT)));
        out.push_str(&format!("{}\n\n", rule));

        if issues.is_empty() {
            out.push_str("STATUS: HEALTHY. No anomalies detected.\n");
            return out;
        }

        let cost = self.config.friction_cost_per_issue();
        let risk = (issues.len() as u64).saturating_mul(cost);

        out.push_str(&format!("STATUS: FRAGILE. {} anomalies detected.\n", issues.len()));
        out.push_str(&format!(
            "ESTIMATED REVENUE RISK: ${} (Est. ${} friction/error)\n\n",
            risk, cost
        ));
        out.push_str("DETAILED FINDINGS:\n");
        for issue in issues {
            out.push_str(&format!("[ALERT] {}\n", issue));
        }

        out
    }

    /// Overwrites the configured report path and returns it.
    pub fn write(&self, result: &ScanResult) -> Result<PathBuf> {
        let report_path = self.config.report_path().to_path_buf();
        let report = self.render(&result.issues, Local::now().naive_local());

        self.storage.write_file(&report_path, report.as_bytes())?;

        tracing::info!("REPORT GENERATED: Saved to {}", report_path.display());
        Ok(report_path)
    }
}
