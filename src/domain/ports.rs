use crate::utils::error::Result;
use std::path::Path;

/// Whole-file sink for generated artifacts. Each call replaces the target.
pub trait Storage {
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn report_path(&self) -> &Path;
    fn critical_columns(&self) -> &[String];
    fn friction_cost_per_issue(&self) -> u64;
}
