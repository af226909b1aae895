// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Persisted CLI settings, `~/.g16/config.json`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// `tracing` filter directive, e.g. `g16_verifier=debug`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    /// Verify without the auxiliary Miller-loop thread
    pub sequential: bool,
}

pub fn settings_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".g16").join("config.json"))
}

impl Settings {
    /// Defaults when no settings file exists yet
    pub fn load() -> Result<Self> {
        let path = settings_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("cannot read settings at {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("invalid settings JSON at {}", path.display()))
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = settings_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).with_context(|| format!("cannot write settings at {}", path.display()))?;
        Ok(path)
    }
}
