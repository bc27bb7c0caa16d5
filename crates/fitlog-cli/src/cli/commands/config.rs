//! Configuration file commands for fitlog

use crate::cli::output::print_json;
use crate::cli::GlobalOpts;
use crate::config::Config;
use crate::error::{FitlogError, Result};
use crate::models::Collection;

/// Print the config file location
pub fn path(opts: &GlobalOpts) -> Result<()> {
    let path = opts.config_path()?;
    println!("{}", path.display());
    Ok(())
}

/// Print the effective configuration with the API key masked
pub fn show(opts: &GlobalOpts) -> Result<()> {
    let path = opts.config_path()?;
    let mut config = opts.load_config()?;

    let masked = config.masked_api_key();
    config.api_key = masked;

    if opts.json() {
        return print_json(&config);
    }

    println!("Config file:  {}{}", path.display(), if path.exists() { "" } else { " (not found)" });
    println!("Base URL:     {}", config.base_url);
    println!("Record host:  {}", config.record_host);
    println!("Timeout:      {}s", config.timeout_secs);
    println!(
        "API key:      {}",
        if config.api_key.is_empty() { "(not set)" } else { config.api_key.as_str() }
    );
    println!();
    println!("{:<14} {}", "Collection", "Id");
    println!("{}", "-".repeat(40));
    for collection in Collection::ALL {
        println!("{:<14} {}", collection.name(), config.collections.id(collection));
    }
    Ok(())
}

/// Write a config file holding the given API key, or the global one
pub fn init(opts: &GlobalOpts, api_key: Option<String>, force: bool) -> Result<()> {
    let path = opts.config_path()?;
    if path.exists() && !force {
        return Err(FitlogError::config(format!(
            "{} already exists. Use --force to overwrite",
            path.display()
        )));
    }

    let config = Config {
        api_key: api_key.or_else(|| opts.api_key.clone()).unwrap_or_default(),
        ..Config::default()
    }
    .with_overrides(opts.base_url.clone(), None);
    config.validate()?;
    config.save(&path)?;

    tracing::info!(path = %path.display(), "config written");
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let opts = GlobalOpts {
            config_path: Some(temp_dir.path().join("config.toml")),
            ..Default::default()
        };

        init(&opts, Some("key-1234".to_string()), false).unwrap();
        assert!(init(&opts, Some("key-5678".to_string()), false).is_err());

        init(&opts, Some("key-5678".to_string()), true).unwrap();
        assert_eq!(opts.load_config().unwrap().api_key, "key-5678");
    }

    #[test]
    fn test_init_rejects_empty_key() {
        let temp_dir = TempDir::new().unwrap();
        let opts = GlobalOpts {
            config_path: Some(temp_dir.path().join("config.toml")),
            ..Default::default()
        };

        assert!(init(&opts, None, false).is_err());
        assert!(!temp_dir.path().join("config.toml").exists());
    }
}
