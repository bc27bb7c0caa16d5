use crate::error::{FitlogError, Result};
use crate::models::Collection;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// REST root of the hosted record store
pub const DEFAULT_BASE_URL: &str = "https://my.living-apps.de/rest";

/// Host used when writing reference locators into records
pub const DEFAULT_RECORD_HOST: &str = "https://my.living-apps.de";

/// Connection settings for the record store.
///
/// Loaded from a TOML file; every key is optional and falls back to the
/// defaults below. The API key has no default and must come from the file,
/// `FITLOG_API_KEY` or `--api-key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub record_host: String,
    pub timeout_secs: u64,
    pub collections: CollectionIds,
}

/// Store-side identifiers of the six collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionIds {
    pub exercises: String,
    pub workouts: String,
    pub nutrition: String,
    pub workout_logs: String,
    pub goals: String,
    pub body_metrics: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            record_host: DEFAULT_RECORD_HOST.to_string(),
            timeout_secs: 30,
            collections: CollectionIds::default(),
        }
    }
}

impl Default for CollectionIds {
    fn default() -> Self {
        Self {
            exercises: "6914a7e259d98c952771c809".to_string(),
            workouts: "6914a7e7b773d677cf3838c1".to_string(),
            nutrition: "6914a7e8078cdd936a7fe8bf".to_string(),
            workout_logs: "6914a7e8154ee0268140a731".to_string(),
            goals: "6914a7ead630b6a1488ff831".to_string(),
            body_metrics: "6914a7e9764e7bbbd63bbd93".to_string(),
        }
    }
}

impl CollectionIds {
    /// Identifier of the given collection
    pub fn id(&self, collection: Collection) -> &str {
        match collection {
            Collection::Exercises => &self.exercises,
            Collection::Workouts => &self.workouts,
            Collection::Nutrition => &self.nutrition,
            Collection::WorkoutLogs => &self.workout_logs,
            Collection::Goals => &self.goals,
            Collection::BodyMetrics => &self.body_metrics,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| FitlogError::config(format!("Invalid config file: {}", e)))
    }

    /// Load configuration from a file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Write configuration to a file with owner-only permissions
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            super::ensure_dir(parent)?;
        }

        let text = toml::to_string_pretty(self)
            .map_err(|e| FitlogError::config(format!("Could not serialize config: {}", e)))?;
        fs::write(path, text)?;

        // The file holds the API key
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// Apply command-line or environment overrides
    pub fn with_overrides(mut self, base_url: Option<String>, api_key: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(key) = api_key {
            self.api_key = key;
        }
        self
    }

    /// Check that the settings are usable for talking to the store
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(FitlogError::config(
                "No API key configured. Set api_key in the config file or FITLOG_API_KEY",
            ));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(FitlogError::config(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        for collection in Collection::ALL {
            if self.collections.id(collection).trim().is_empty() {
                return Err(FitlogError::config(format!(
                    "Missing collection id for {}",
                    collection
                )));
            }
        }
        Ok(())
    }

    /// API key with all but the last four characters hidden
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), tail)
    }
}
