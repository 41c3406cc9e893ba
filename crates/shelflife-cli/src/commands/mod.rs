//! Subcommands.

pub mod batch;
pub mod config;
pub mod extract;
pub mod plan;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use shelflife_core::models::config::ShelflifeConfig;
use shelflife_core::parse_stored_date;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shelflife")
        .join("config.json")
}

/// Load configuration from `--config`, else the default file, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ShelflifeConfig> {
    if let Some(path) = config_path {
        return Ok(ShelflifeConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(ShelflifeConfig::from_file(&default_path)?)
    } else {
        Ok(ShelflifeConfig::default())
    }
}

/// clap value parser for `YYYY-MM-DD` arguments.
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_stored_date(s).map_err(|e| e.to_string())
}
