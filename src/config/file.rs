//! Configuration file loading.

use super::types::BuildConfig;
use super::validation::Validatable;
use crate::error::{OasError, Result};
use std::path::Path;

/// Load a `BuildConfig` from a YAML file and validate it.
pub fn load_config_file(path: &Path) -> Result<BuildConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| OasError::io(path, e))?;
    let config: BuildConfig = serde_yaml::from_str(&content)
        .map_err(|e| OasError::config(format!("{}: {e}", path.display())))?;

    let errors = config.validate();
    if let Some(first) = errors.first() {
        return Err(OasError::config(format!("{}: {first}", path.display())));
    }
    Ok(config)
}

/// Load config from `path` if given, or return the default.
///
/// A file that fails to load is logged and replaced by the default.
#[must_use]
pub fn load_or_default(path: Option<&Path>) -> BuildConfig {
    path.map_or_else(BuildConfig::default, |path| match load_config_file(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config from {}: {}", path.display(), e);
            BuildConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "allow_circular_references: true\nlocation: api.yaml").unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert!(config.allow_circular_references);
        assert_eq!(config.location.as_deref(), Some("api.yaml"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "location: 'api.yaml#/x'").unwrap();
        assert!(matches!(
            load_config_file(file.path()),
            Err(OasError::Config(_))
        ));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = load_or_default(Some(Path::new("/definitely/not/here.yaml")));
        assert_eq!(config, BuildConfig::default());
        assert_eq!(load_or_default(None), BuildConfig::default());
    }
}
