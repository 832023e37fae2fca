//! Config command handlers. All of them are read-only.

use anyhow::{Context, Result};
use pitwall_core::config;

pub fn path() {
    println!("{}", config::paths::config_path().display());
}

pub fn show(config: &config::Config) -> Result<()> {
    let toml = config.to_toml().context("render effective config")?;
    print!("{toml}");
    Ok(())
}

pub fn template() {
    print!("{}", config::default_config_template());
}
