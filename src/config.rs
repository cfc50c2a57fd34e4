//! Configuration file support for release-digest.
//!
//! Provides YAML-based configuration through `release-digest.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::digest::domain::ComponentCatalog;
use crate::shared::{DigestError, Result};

const CONFIG_FILENAME: &str = "release-digest.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Summarize endpoint URL.
    pub endpoint: Option<String>,
    /// Backend-assisted export endpoint URL.
    pub export_endpoint: Option<String>,
    /// Component ids selected by default when the CLI passes none.
    pub components: Option<Vec<String>>,
    /// Default export format (text or markdown).
    pub format: Option<String>,
    /// Directory exported documents are written into.
    pub output_dir: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path, catalog: &ComponentCatalog) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, catalog)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path, catalog: &ComponentCatalog) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path, catalog)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, catalog: &ComponentCatalog) -> Result<()> {
    if let Some(ref components) = config.components {
        for id in components {
            if catalog.index_of_id(id).is_none() {
                return Err(DigestError::UnknownComponent {
                    id: id.clone(),
                    available: catalog.available_ids(),
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
endpoint: http://localhost:8000/api/dynatrace-release-news-summary
components:
  - oneagent
  - active_gate
format: markdown
"#,
        )
        .unwrap();

        let catalog = ComponentCatalog::standard();
        let config = load_config_from_path(&config_path, &catalog).unwrap();

        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://localhost:8000/api/dynatrace-release-news-summary")
        );
        assert_eq!(
            config.components,
            Some(vec!["oneagent".to_string(), "active_gate".to_string()])
        );
        assert_eq!(config.format.as_deref(), Some("markdown"));
    }

    #[test]
    fn test_unknown_component_in_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
components:
  - not_a_component
"#,
        )
        .unwrap();

        let catalog = ComponentCatalog::standard();
        let result = load_config_from_path(&config_path, &catalog);

        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Unknown component id: not_a_component"));
    }

    #[test]
    fn test_discover_config_missing_returns_none() {
        let dir = TempDir::new().unwrap();
        let catalog = ComponentCatalog::standard();
        let config = discover_config(dir.path(), &catalog).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "components: [unterminated").unwrap();

        let catalog = ComponentCatalog::standard();
        assert!(load_config_from_path(&config_path, &catalog).is_err());
    }
}
