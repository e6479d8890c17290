// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use slotcal_core::{APP_NAME, Config as CoreConfig};

const SLOTCAL_CONFIG_ENV: &str = "SLOTCAL_CONFIG";

/// Minutes before each occurrence at which a popup reminder fires.
pub const DEFAULT_REMINDER_MINUTES: u32 = 10;

/// Loads the configuration.
///
/// The file is taken from `path`, then from `$SLOTCAL_CONFIG`, then from the
/// user config directory. Only the last one may be absent, in which case the
/// defaults apply.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(SLOTCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok((CoreConfig::default(), Config::default()));
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e).into())
        .map(|a| (a.core, a.output))
}

/// Output settings of the slotcal command-line interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Popup reminder attached to created events, in minutes.
    #[serde(default = "default_reminder_minutes")]
    pub reminder_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reminder_minutes: default_reminder_minutes(),
        }
    }
}

const fn default_reminder_minutes() -> u32 {
    DEFAULT_REMINDER_MINUTES
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,

    #[serde(default)]
    output: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
