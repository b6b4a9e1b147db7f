// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Satori", "satori-roi"));

pub fn settings_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("settings.json"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// House inventory dataset; the bundled one is used when unset.
    pub inventory_path: Option<PathBuf>,
    /// House-type economics dataset; the bundled one is used when unset.
    pub house_types_path: Option<PathBuf>,
    pub default_high_occupancy: Decimal,
    pub default_low_occupancy: Decimal,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            inventory_path: None,
            house_types_path: None,
            default_high_occupancy: Decimal::new(8, 1),
            default_low_occupancy: Decimal::new(7, 1),
            log_level: None,
        }
    }
}

impl Settings {
    /// Read settings from the platform config dir, falling back to defaults
    /// when no settings file exists yet.
    pub fn load() -> Result<Self> {
        let path = settings_path()?;
        if !path.exists() {
            return Ok(Settings::default());
        }
        Settings::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read settings at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }
}
