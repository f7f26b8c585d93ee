use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use iptvlist_rs::{DEFAULT_GROUP, DEFAULT_PLAYLIST_NAME, ParserOptions};
use log::debug;
use serde::Deserialize;

/// Environment variable read by `--config`
pub const CONFIG_ENV: &str = "M3U2JSON_CONFIG";
pub const DEFAULT_OUTPUT: &str = "output.json";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub default_group: Option<String>,
    pub default_playlist_name: Option<String>,
    pub default_output: Option<String>,
    pub pretty: Option<bool>,
}

impl Config {
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            default_group: self
                .default_group
                .as_deref()
                .unwrap_or(DEFAULT_GROUP)
                .into(),
            default_playlist_name: self
                .default_playlist_name
                .as_deref()
                .unwrap_or(DEFAULT_PLAYLIST_NAME)
                .into(),
        }
    }

    pub fn output_path(&self) -> &str {
        self.default_output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    pub fn pretty(&self) -> bool {
        self.pretty.unwrap_or(true)
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let file = File::open(path.as_ref())
        .with_context(|| format!("failed to open config file {}", path.as_ref().display()))?;
    let config: Config = serde_yaml::from_reader(file)
        .with_context(|| format!("failed to parse config file {}", path.as_ref().display()))?;
    Ok(config)
}

/// Load from `path` when given, defaults otherwise
pub fn resolve_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_config(path),
        None => {
            debug!("No config file, using defaults");
            Ok(Config::default())
        }
    }
}
