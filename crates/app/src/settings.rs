//! Handles settings for the application.
//!
//! Sources, lowest priority first: built-in defaults, the optional TOML file
//! (`inventory.toml` or `--config`), `INVENTORY_*` environment variables and
//! finally command line overrides.
use serde::Deserialize;

use crate::{cli::Cli, error::Result};

const DEFAULT_CONFIG_PATH: &str = "inventory.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database_url: String,
    pub log_level: String,
    pub currency_symbol: String,
    pub max_connections: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: "sqlite:./inventory.db?mode=rwc".to_string(),
            log_level: "warn".to_string(),
            currency_symbol: "$".to_string(),
            max_connections: 1,
        }
    }
}

impl Settings {
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut builder = config::Config::builder();
        builder = builder.add_source(config::File::with_name(config_path).required(false));
        builder = builder.add_source(config::Environment::with_prefix("INVENTORY"));
        let mut settings: Settings = builder.build()?.try_deserialize()?;

        if let Some(database_url) = &cli.database_url {
            settings.database_url = database_url.clone();
        }
        if let Some(log_level) = &cli.log_level {
            settings.log_level = log_level.clone();
        }
        settings.max_connections = settings.max_connections.max(1);
        // Each connection to an in-memory database opens a separate, empty one.
        if settings.database_url.contains(":memory:") {
            settings.max_connections = 1;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_apply_without_file() {
        let cli = Cli::try_parse_from(["inventory", "--config", "does/not/exist", "total"]).unwrap();
        let settings = Settings::load(&cli).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.max_connections >= 1);
    }

    #[test]
    fn cli_overrides_win() {
        let cli = Cli::try_parse_from([
            "inventory",
            "--config",
            "does/not/exist",
            "--database-url",
            "sqlite::memory:",
            "--log-level",
            "debug",
            "list",
        ])
        .unwrap();
        let settings = Settings::load(&cli).unwrap();
        assert_eq!(settings.database_url, "sqlite::memory:");
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn reads_toml_file() {
        let dir = std::env::temp_dir().join(format!("inventory_settings_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("custom.toml");
        std::fs::write(&path, "currency_symbol = \"€\"\nlog_level = \"info\"\n").unwrap();

        let path_str = path.to_string_lossy().to_string();
        let cli = Cli::try_parse_from(["inventory", "--config", path_str.as_str(), "total"]).unwrap();
        let settings = Settings::load(&cli).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.log_level, "info");

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn in_memory_database_uses_one_connection() {
        let dir = std::env::temp_dir().join(format!("inventory_pool_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("pool.toml");
        std::fs::write(&path, "max_connections = 4\n").unwrap();
        let path_str = path.to_string_lossy().to_string();

        let cli = Cli::try_parse_from(["inventory", "--config", path_str.as_str(), "total"]).unwrap();
        assert_eq!(Settings::load(&cli).unwrap().max_connections, 4);

        let cli = Cli::try_parse_from([
            "inventory",
            "--config",
            path_str.as_str(),
            "--database-url",
            "sqlite::memory:",
            "total",
        ])
        .unwrap();
        assert_eq!(Settings::load(&cli).unwrap().max_connections, 1);

        let _ = std::fs::remove_dir_all(dir);
    }
}
