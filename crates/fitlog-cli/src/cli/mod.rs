//! Terminal front end: global options, output helpers and command handlers

pub mod commands;
pub mod output;

use std::path::PathBuf;

use crate::client::RecordStore;
use crate::config::{self, Config};
use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Options shared by every command
#[derive(Clone, Debug, Default)]
pub struct GlobalOpts {
    pub format: OutputFormat,
    pub config_path: Option<PathBuf>,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl GlobalOpts {
    /// Config file in use: the explicit path or the platform default
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => config::default_config_path(),
        }
    }

    /// Load the config file and apply overrides
    pub fn load_config(&self) -> Result<Config> {
        let config = Config::load(&self.config_path()?)?;
        Ok(config.with_overrides(self.base_url.clone(), self.api_key.clone()))
    }

    /// Open a record store client from the effective configuration
    pub fn open_store(&self) -> Result<RecordStore> {
        RecordStore::new(&self.load_config()?)
    }

    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_win_over_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_key = \"from-file\"\nbase_url = \"https://file.example\"\n",
        )
        .unwrap();

        let opts = GlobalOpts {
            config_path: Some(path),
            api_key: Some("from-flag".to_string()),
            ..Default::default()
        };

        let config = opts.load_config().unwrap();
        assert_eq!(config.api_key, "from-flag");
        assert_eq!(config.base_url, "https://file.example");
    }

    #[test]
    fn test_open_store_requires_api_key() {
        let temp_dir = TempDir::new().unwrap();
        let opts = GlobalOpts {
            config_path: Some(temp_dir.path().join("missing.toml")),
            ..Default::default()
        };

        assert!(opts.open_store().is_err());
    }
}
