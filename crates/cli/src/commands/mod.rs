pub mod build;
pub mod render;
pub mod serve;
pub mod validate;

use anyhow::{Context, Result};
use render_modes_core::{SiteConfig, parse_site_toml};
use std::path::Path;

/// Load site.toml when given, otherwise fall back to defaults
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file does not exist: {}", path.display());
            }
            parse_site_toml(path).with_context(|| format!("Failed to parse {}", path.display()))
        }
        None => Ok(SiteConfig::default()),
    }
}
