use thiserror::Error;

use crate::config::{LookupSettings, Settings, StorageSettings};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_lookup(&settings.lookup) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_storage(&settings.storage) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_lookup(lookup: &LookupSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if lookup.base_url.trim().is_empty() {
            errors.push(ValidationError::MissingField("lookup.base_url".to_string()));
        } else if !(lookup.base_url.starts_with("http://")
            || lookup.base_url.starts_with("https://"))
        {
            errors.push(ValidationError::InvalidValue {
                field: "lookup.base_url".to_string(),
                reason: format!("'{}' is not an http(s) URL", lookup.base_url),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_storage(storage: &StorageSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if storage.namespace.contains(':') {
            errors.push(ValidationError::InvalidValue {
                field: "storage.namespace".to_string(),
                reason: "must not contain ':'".to_string(),
            });
        }

        if storage.path.trim().is_empty() {
            errors.push(ValidationError::MissingField("storage.path".to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
