use config::{Config, ConfigError, Environment, File};
use log::LevelFilter;
use serde::Deserialize;

use crate::network::Network;

/// Table layout configuration.
///
/// Page sizes are the initial rows-per-page of each table; a table can still
/// change its own page size afterwards.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplaySettings {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    #[serde(default = "default_items_per_page")]
    pub transactions_per_page: usize,
    /// Show the loading placeholder instead of an empty table when a
    /// snapshot section is missing
    #[serde(default)]
    pub skeleton_on_empty: bool,
}

fn default_items_per_page() -> usize {
    10
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            transactions_per_page: default_items_per_page(),
            skeleton_on_empty: false,
        }
    }
}

/// Location of the indexer snapshots.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DataSettings {
    /// Directory holding `mainnet.json` / `testnet.json`
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: String,
    /// Network used when the `network` query is missing
    #[serde(default)]
    pub default_network: Network,
}

fn default_snapshot_dir() -> String {
    "snapshots".to_string()
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            snapshot_dir: default_snapshot_dir(),
            default_network: Network::default(),
        }
    }
}

/// Log output configuration.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingSettings {
    /// One of off, error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingSettings {
    /// Parsed level, falling back to `Info` for unknown names.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// Root application configuration.
///
/// Loaded from an optional `config.yaml` next to the binary, then
/// `POOLSCOPE__*` environment variables (e.g. `POOLSCOPE__DISPLAY__ITEMS_PER_PAGE=25`).
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load settings from `name` (any extension the `config` crate knows) and
    /// the environment. A missing file is not an error.
    pub fn from_file(name: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(name).required(false))
            .add_source(Environment::with_prefix("POOLSCOPE").separator("__"))
            .build()?;

        let settings: Settings = s.try_deserialize()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::FileFormat;

    fn from_yaml(yaml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::from_file("does-not-exist/config").unwrap();
        assert_eq!(settings.display.items_per_page, 10);
        assert_eq!(settings.data.snapshot_dir, "snapshots");
        assert_eq!(settings.data.default_network, Network::Mainnet);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let settings = from_yaml(
            "display:\n  items_per_page: 25\ndata:\n  default_network: TESTNET\n",
        );
        assert_eq!(settings.display.items_per_page, 25);
        assert_eq!(settings.display.transactions_per_page, 10);
        assert_eq!(settings.data.default_network, Network::Testnet);
        assert_eq!(settings.logging.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_log_level_parsing() {
        let logging = LoggingSettings {
            level: "debug".to_string(),
        };
        assert_eq!(logging.level_filter(), LevelFilter::Debug);

        let bogus = LoggingSettings {
            level: "loud".to_string(),
        };
        assert_eq!(bogus.level_filter(), LevelFilter::Info);
    }
}
