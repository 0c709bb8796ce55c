//! File System Utilities
//!
//! Configuration directory lookup.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/mimic-ui/` or `$XDG_CONFIG_HOME/mimic-ui/`
/// - **macOS**: `~/Library/Application Support/io.mimic.mimic-ui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\mimic\mimic-ui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("io", "mimic", "mimic-ui") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
