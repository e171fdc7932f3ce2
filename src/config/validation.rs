//! Configuration validation.

use super::types::BuildConfig;

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for BuildConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(location) = &self.location {
            if location.trim().is_empty() {
                errors.push(ConfigError {
                    field: "location".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            if location.contains('#') {
                errors.push(ConfigError {
                    field: "location".to_string(),
                    message: format!("'{location}' must not contain a fragment"),
                });
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(BuildConfig::default().is_valid());
    }

    #[test]
    fn test_location_rules() {
        let config = BuildConfig::builder().location("api.yaml#/paths").build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "location");

        let config = BuildConfig::builder().location("  ").build();
        assert!(!config.is_valid());
    }
}
