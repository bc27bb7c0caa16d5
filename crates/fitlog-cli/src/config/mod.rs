mod settings;

pub use settings::{CollectionIds, Config, DEFAULT_BASE_URL, DEFAULT_RECORD_HOST};

use crate::error::{FitlogError, Result};
use std::path::{Path, PathBuf};

/// Default configuration directory name
const CONFIG_DIR_NAME: &str = "fitlog";

/// Configuration file name inside the config directory
const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the configuration directory path
/// Returns ~/.config/fitlog on Unix, ~/Library/Application Support/fitlog on macOS
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(CONFIG_DIR_NAME))
        .ok_or_else(|| FitlogError::config("Could not determine config directory"))
}

/// Get the default configuration file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
