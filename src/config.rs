// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Limits enforced by the form guards, optionally overridden from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TimeOfDay;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "APPTFORM_CONFIG";

/// Validation limits for the appointment details form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Earliest bookable time on days other than today.
    pub opening_time: TimeOfDay,
    /// Latest bookable time on any day.
    pub closing_time: TimeOfDay,
    /// Minutes added to "now" to get the earliest time bookable today.
    pub same_day_buffer_minutes: u32,
    /// Largest accepted document, in bytes.
    pub max_document_bytes: u64,
    /// How many days past today the date picker allows.
    pub booking_horizon_days: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            opening_time: TimeOfDay::hm(9, 0),
            closing_time: TimeOfDay::hm(22, 0),
            same_day_buffer_minutes: 1,
            max_document_bytes: 2 * 1024 * 1024,
            booking_horizon_days: 10,
        }
    }
}

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("opening_time {opening} must not be after closing_time {closing}")]
    InvertedWindow {
        opening: TimeOfDay,
        closing: TimeOfDay,
    },
    #[error("max_document_bytes must be greater than zero")]
    ZeroDocumentLimit,
    #[error("same_day_buffer_minutes must be below 60, got {0}")]
    BufferTooLarge(u32),
}

impl FormConfig {
    /// Load from `$APPTFORM_CONFIG`, else the per-user config file, else defaults.
    pub fn load() -> Result<Self> {
        Self::load_with(
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            default_config_path(),
        )
    }

    /// Load `explicit` when given (it must exist), else `fallback` when that
    /// file exists, else the defaults.
    pub fn load_with(explicit: Option<PathBuf>, fallback: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(&path);
        }
        match fallback {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log::info!("No config file found, using built-in form limits");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        log::info!("Loaded form limits from {}", path.display());
        Ok(config)
    }

    /// Check internal consistency of the limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.opening_time > self.closing_time {
            return Err(ConfigError::InvertedWindow {
                opening: self.opening_time,
                closing: self.closing_time,
            });
        }
        if self.max_document_bytes == 0 {
            return Err(ConfigError::ZeroDocumentLimit);
        }
        if self.same_day_buffer_minutes >= 60 {
            return Err(ConfigError::BufferTooLarge(self.same_day_buffer_minutes));
        }
        Ok(())
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "apptform", "apptform")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
