// irc_overlay — An in-game IRC chat overlay for the terminal
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Configuration: built-in defaults, then the TOML config file, then CLI flags.

use crate::Cli;
use crate::panel::DEFAULT_STEP;
use crate::store::{DEFAULT_HISTORY_CAPACITY, DEFAULT_LOG_CAPACITY};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },
    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Menu color in the game's 0..=255 HSL channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiColor {
    pub hue: u8,
    pub sat: u8,
    pub lht: u8,
}

impl Default for UiColor {
    fn default() -> Self {
        Self { hue: 160, sat: 70, lht: 175 }
    }
}

/// `config.toml` as written by the user. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    /// Extra names seeded into the loopback roster.
    #[serde(default)]
    pub users: Option<Vec<String>>,
    /// Scrollback budget in bytes.
    #[serde(default)]
    pub log_capacity: Option<usize>,
    /// Input history budget in bytes.
    #[serde(default)]
    pub history_capacity: Option<usize>,
    #[serde(default)]
    pub anim_step: Option<f32>,
    #[serde(default)]
    pub ui_color: Option<UiColor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub nickname: String,
    pub channel: String,
    pub users: Vec<String>,
    pub log_capacity: usize,
    pub history_capacity: usize,
    pub anim_step: f32,
    pub ui_color: UiColor,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            nickname: "player".to_owned(),
            channel: "#lobby".to_owned(),
            users: Vec::new(),
            log_capacity: DEFAULT_LOG_CAPACITY,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            anim_step: DEFAULT_STEP,
            ui_color: UiColor::default(),
        }
    }
}

/// `<config dir>/irc-overlay/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("irc-overlay").join("config.toml"))
}

/// A missing file is `Ok(None)`, not an error.
pub fn load_config_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let file = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(Some(file))
}

/// Merge defaults < file < CLI and validate the result.
pub fn resolve(file: Option<ConfigFile>, cli: &Cli) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();
    let file = file.unwrap_or_default();

    let resolved = ResolvedConfig {
        nickname: cli.nick.clone().or(file.nickname).unwrap_or(defaults.nickname),
        channel: cli.channel.clone().or(file.channel).unwrap_or(defaults.channel),
        users: file.users.unwrap_or(defaults.users),
        log_capacity: file.log_capacity.unwrap_or(defaults.log_capacity),
        history_capacity: file.history_capacity.unwrap_or(defaults.history_capacity),
        anim_step: cli.anim_step.or(file.anim_step).unwrap_or(defaults.anim_step),
        ui_color: file.ui_color.unwrap_or(defaults.ui_color),
    };
    validate(&resolved)?;
    Ok(resolved)
}

fn validate(config: &ResolvedConfig) -> Result<(), ConfigError> {
    if config.nickname.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "nickname",
            reason: "must not be empty".to_owned(),
        });
    }
    if !(config.anim_step > 0.0 && config.anim_step <= 1.0) {
        return Err(ConfigError::InvalidValue {
            key: "anim_step",
            reason: format!("{} is outside (0, 1]", config.anim_step),
        });
    }
    if config.log_capacity == 0 {
        return Err(ConfigError::InvalidValue {
            key: "log_capacity",
            reason: "must be greater than zero".to_owned(),
        });
    }
    if config.history_capacity == 0 {
        return Err(ConfigError::InvalidValue {
            key: "history_capacity",
            reason: "must be greater than zero".to_owned(),
        });
    }
    Ok(())
}
