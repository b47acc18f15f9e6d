use crate::core::reporter::Reporter;
use crate::core::scanner::Scanner;
use crate::core::{ConfigProvider, Result, Storage};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub report_path: PathBuf,
    pub issue_count: usize,
    pub rows_analyzed: usize,
}

/// Runs the scanner to completion, then writes the report. One attempt each.
pub struct ObserverEngine<S: Storage, C: ConfigProvider + Clone> {
    scanner: Scanner<C>,
    reporter: Reporter<S, C>,
}

impl<S: Storage, C: ConfigProvider + Clone> ObserverEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            scanner: Scanner::new(config.clone()),
            reporter: Reporter::new(storage, config),
        }
    }

    pub fn run(&self) -> Result<RunSummary> {
        let result = self.scanner.scan()?;
        tracing::debug!(
            "Scan produced {} issues over {} rows",
            result.issue_count(),
            result.rows_analyzed
        );

        let report_path = self.reporter.write(&result)?;

        Ok(RunSummary {
            report_path,
            issue_count: result.issue_count(),
            rows_analyzed: result.rows_analyzed,
        })
    }
}
