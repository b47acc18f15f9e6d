use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// Four orders exercising a missing email, a negative total and a duplicate row.
pub const SAMPLE_DATA: &str = "order_id,email,order_total,shipping_address
1001,chuck@example.com,120.50,123 Main St
1002,,50.00,456 Oak Ave
1003,dave@example.com,-20.00,789 Pine St
1001,chuck@example.com,120.50,123 Main St
";

/// Writes [`SAMPLE_DATA`] to `path` when nothing exists there yet.
/// Returns whether a file was created.
pub fn ensure_sample_data<S: Storage>(storage: &S, path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    tracing::info!("Creating sample data for demonstration at {}", path.display());
    storage.write_file(path, SAMPLE_DATA.as_bytes())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalStorage;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data/sample_data.csv");

        assert!(ensure_sample_data(&LocalStorage::new(), &path).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), SAMPLE_DATA);
    }

    #[test]
    fn test_leaves_existing_file_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sample_data.csv");
        std::fs::write(&path, "order_id\n42\n").unwrap();

        assert!(!ensure_sample_data(&LocalStorage::new(), &path).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "order_id\n42\n");
    }
}
