//! Config - Application Configuration
//!
//! Initial values for the UI stores, read from `mimic-ui.toml` in the
//! platform config directory. Nothing is ever written back.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

const CONFIG_FILE: &str = "mimic-ui.toml";

/// Where the mock server runs relative to the UI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiMode {
    /// Embedded in the inspected page
    #[default]
    Local,
    /// Separate window talking to a remote server
    Remote,
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API mode
    pub api_mode: ApiMode,
    /// Panel sizes
    pub ui: UiConfig,
    /// Request log layout
    pub request_log: RequestLogConfig,
}

/// Panel size configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Editor height in pixels (ignored in remote mode, which is full height)
    pub editor_height: u32,
    /// Mocks sidebar width in pixels
    pub mocks_sidebar_width: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            editor_height: 400,
            mocks_sidebar_width: 340,
        }
    }
}

/// Request log layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestLogConfig {
    /// Column widths in pixels, by column name
    pub columns: BTreeMap<String, u32>,
}

impl Default for RequestLogConfig {
    fn default() -> Self {
        let columns = [("method", 70), ("url", 300), ("status", 70), ("delay", 70), ("time", 110)]
            .into_iter()
            .map(|(name, width)| (name.to_string(), width))
            .collect();
        Self { columns }
    }
}

impl AppConfig {
    /// Path of the config file in the platform config directory
    pub fn default_path() -> Result<PathBuf> {
        Ok(get_or_create_config_dir()?.join(CONFIG_FILE))
    }

    /// Load from the platform config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`. A missing or empty file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = ?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = AppConfig::load_from(&dir.path().join(CONFIG_FILE)).expect("load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = write_config("  \n");
        let config = AppConfig::load_from(file.path()).expect("load");
        assert_eq!(config.ui.mocks_sidebar_width, 340);
        assert_eq!(config.request_log.columns.get("url"), Some(&300));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config(
            r#"
api_mode = "remote"

[ui]
mocks_sidebar_width = 280
"#,
        );
        let config = AppConfig::load_from(file.path()).expect("load");
        assert_eq!(config.api_mode, ApiMode::Remote);
        assert_eq!(config.ui.mocks_sidebar_width, 280);
        assert_eq!(config.ui.editor_height, 400);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let file = write_config("api_mode = 3");
        let result = AppConfig::load_from(file.path());
        assert!(matches!(result, Err(Error::TomlDe { .. })));
    }
}
