//! Settings resolution.
//!
//! Each setting comes from the first source that has it: command-line flag
//! or environment variable (both handled by clap), then
//! `<config dir>/rankbook/config.toml`, then the built-in default.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use rankbook::{AccountRoute, DEFAULT_LEDGER_FILE, JsonFileStore, PlatformConfig};
use serde::Deserialize;
use tracing::debug;

use crate::cli::Args;

/// Contents of the optional TOML config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub api_key: Option<String>,
    pub account_route: Option<String>,
    pub timeout_secs: Option<u64>,
    pub retries: Option<u32>,
    pub db: Option<String>,
    pub base_url: Option<String>,
}

/// `<config dir>/rankbook/config.toml`, if the platform has a config dir.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rankbook").join("config.toml"))
}

impl FileSettings {
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        debug!("Loaded config from {}", path.display());
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

#[derive(Debug)]
pub struct Settings {
    pub db: PathBuf,
    api_key: Option<String>,
    account_route: AccountRoute,
    timeout: Duration,
    retries: u32,
    base_url: Option<String>,
}

impl Settings {
    pub fn resolve(args: &Args, file: FileSettings) -> Result<Self> {
        let account_route = match args.account_route.as_deref().or(file.account_route.as_deref()) {
            Some(route) => AccountRoute::parse(route)?,
            None => AccountRoute::default(),
        };

        Ok(Self {
            db: args
                .db
                .clone()
                .or(file.db)
                .unwrap_or_else(|| DEFAULT_LEDGER_FILE.to_string())
                .into(),
            api_key: args.api_key.clone().or(file.api_key),
            account_route,
            timeout: args
                .timeout
                .or(file.timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(rankbook::config::DEFAULT_TIMEOUT),
            retries: args.retries.or(file.retries).unwrap_or(0),
            base_url: args.base_url.clone().or(file.base_url),
        })
    }

    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.db)
    }

    /// Client configuration. Only commands that reach the platform need a key.
    pub fn platform_config(&self) -> Result<PlatformConfig> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .context(
                "No API key specified. Use --api-key, RIOT_API_KEY env, or api_key in the config file.",
            )?;

        let mut config = PlatformConfig::new(api_key)
            .with_account_route(self.account_route)
            .with_timeout(self.timeout)
            .with_retries(self.retries);
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.as_str());
        }
        Ok(config)
    }
}
