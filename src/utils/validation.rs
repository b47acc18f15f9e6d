use crate::utils::error::{ObserverError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ObserverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ObserverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ObserverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_column_names(field_name: &str, columns: &[String]) -> Result<()> {
    for (index, column) in columns.iter().enumerate() {
        validate_non_empty_string(&format!("{}[{}]", field_name, index), column)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_path", "sample_data.csv").is_ok());
        assert!(validate_path("input_path", "").is_err());
        assert!(validate_path("input_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_column_names() {
        let columns = vec!["email".to_string(), "order_total".to_string()];
        assert!(validate_column_names("critical_columns", &columns).is_ok());

        let blank = vec!["email".to_string(), "  ".to_string()];
        match validate_column_names("critical_columns", &blank) {
            Err(ObserverError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "critical_columns[1]");
            }
            other => panic!("expected invalid value error, got {:?}", other),
        }
    }
}
