use std::path::PathBuf;

use anyhow::{Context, Result};

use kinesio_core::config::{Config, ConfigPaths};

pub fn print_effective(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_effective(config_path)?;
    let output = config.to_toml_string()?;
    println!("{}", output);
    Ok(())
}

/// Loads the config file if one exists, falling back to defaults. The
/// tool works out of the box without an `init`.
pub fn load_effective(config_path: Option<PathBuf>) -> Result<Config> {
    let paths = ConfigPaths::resolve()?;
    let config_path = config_path.unwrap_or(paths.config_path);
    if config_path.exists() {
        Config::load(&config_path)
            .with_context(|| format!("load config {}", config_path.display()))
    } else {
        Ok(Config::default_config())
    }
}
