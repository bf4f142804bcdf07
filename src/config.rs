use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::switcher::registry::VersionRegistry;

// =============================================================================
// Time-related constants
// =============================================================================

/// Default timeout for a single existence probe in milliseconds (10 seconds)
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Widget configuration, typically loaded from a JSON file
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SwitcherConfig {
    /// Ordered mapping of version identifier to display label; file order is
    /// display order in the dropdown
    pub versions: IndexMap<String, String>,
    pub probe: ProbeConfig,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            versions: default_versions(),
            probe: ProbeConfig::default(),
        }
    }
}

/// Versions shipped with the documentation site, newest first
fn default_versions() -> IndexMap<String, String> {
    IndexMap::from([
        ("dev".to_string(), "dev".to_string()),
        ("0.13".to_string(), "0.13".to_string()),
        ("0.12c".to_string(), "0.12c".to_string()),
    ])
}

/// Probe-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProbeConfig {
    /// Per-request probe timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
        }
    }
}

impl SwitcherConfig {
    /// Load configuration from a JSON file; missing fields use defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// The version registry described by this config
    pub fn registry(&self) -> VersionRegistry {
        VersionRegistry::from(self.versions.clone())
    }
}

/// Read-only context for the current page, supplied by the hosting site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Version identifier of the current page (e.g. "0.13")
    pub version: String,
    /// Precise release string shown for the current version (e.g. "0.13.1")
    pub release: String,
    /// Full URL of the current page
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_partial_json_uses_defaults_for_missing_fields() {
        let config: SwitcherConfig = serde_json::from_str(
            r#"{
                "probe": { "timeoutMs": 2000 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.probe.timeout_ms, 2000);
        assert_eq!(config.versions, default_versions());
    }

    #[test]
    fn config_versions_preserve_file_order() {
        let config: SwitcherConfig = serde_json::from_str(
            r#"{
                "versions": {
                    "0.14": "0.14 (beta)",
                    "dev": "dev",
                    "0.13": "0.13"
                }
            }"#,
        )
        .unwrap();

        let registry = config.registry();
        let identifiers: Vec<&str> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(identifiers, vec!["0.14", "dev", "0.13"]);
        assert_eq!(config.registry().label_for("0.14"), Some("0.14 (beta)"));
        assert_eq!(config.probe.timeout_ms, DEFAULT_PROBE_TIMEOUT_MS);
    }

    #[test]
    fn load_reads_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("switcher.json");
        std::fs::write(
            &path,
            r#"{
                "versions": { "dev": "dev" },
                "probe": { "timeoutMs": 500 }
            }"#,
        )
        .unwrap();

        let config = SwitcherConfig::load(&path).unwrap();

        assert_eq!(config.probe.timeout_ms, 500);
        assert_eq!(config.versions.len(), 1);
    }

    #[test]
    fn load_reports_missing_file() {
        let result = SwitcherConfig::load("/nonexistent/switcher.json");

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn load_reports_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("switcher.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = SwitcherConfig::load(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
