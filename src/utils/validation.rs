use crate::utils::error::{NameError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(NameError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(NameError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| NameError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    match level.to_ascii_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(()),
        _ => Err(NameError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: "Expected one of trace, debug, info, warn, error, off".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "people.csv").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "   ").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("people.json".to_string());
        assert_eq!(validate_required_field("input", &present).unwrap(), "people.json");

        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("input", &missing),
            Err(NameError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("logging.level", "DEBUG").is_ok());
        assert!(validate_log_level("logging.level", "loud").is_err());
        // 只接受等級名稱，完整的過濾規則請用 RUST_LOG
        assert!(validate_log_level("logging.level", "namefmt=debug,info").is_err());
    }
}
