use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Cli;

pub const DEFAULT_CONFIG_PATH: &str = "housing-browser.toml";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    catalog: Option<PathBuf>,
    log_level: Option<String>,
}

/// Effective settings after merging the config file with CLI flags
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub catalog: Option<PathBuf>,
    pub log_level: String,
    pub script: Option<PathBuf>,
}

impl Config {
    /// Explicit `--config` must exist; the default path is optional.
    pub fn load(cli: &Cli) -> Result<Self> {
        let raw = match &cli.config {
            Some(path) => read_config(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    read_config(default)?
                } else {
                    RawConfig::default()
                }
            }
        };

        Ok(Self::merge(raw, cli))
    }

    fn merge(raw: RawConfig, cli: &Cli) -> Self {
        Self {
            catalog: cli.catalog.clone().or(raw.catalog),
            log_level: cli
                .log_level
                .clone()
                .or(raw.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            script: cli.script.clone(),
        }
    }
}

fn read_config(path: &Path) -> Result<RawConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "catalog = \"listings.json\"\nlog_level = \"debug\"").unwrap();

        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            log_level: Some("warn".to_string()),
            ..Default::default()
        };
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("listings.json")));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn defaults_without_file() {
        let config = Config::merge(RawConfig::default(), &Cli::default());
        assert_eq!(config.catalog, None);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            config: Some(dir.path().join("absent.toml")),
            ..Default::default()
        };
        assert!(Config::load(&cli).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = \"secret\"").unwrap();
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let err = Config::load(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse config"));
    }
}
