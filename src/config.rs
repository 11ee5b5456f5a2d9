// src/config.rs

//! Defines the configuration consumed by the video manager.
//!
//! The configuration can be deserialized from a JSON file; command-line
//! parameters (`--video`, `--scale`) are applied on top of it by the binary.
//! It is read once per `VideoManager::init` and not mutated by the manager.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default screen scale ratio.
pub const DEFAULT_SCALE: i32 = 1;

/// Video output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // Missing fields fall back to `VideoConfig::default()`.
pub struct VideoConfig {
    /// Name of the video frontend to select. `None` runs without video output.
    pub frontend: Option<String>,
    /// Screen scale ratio handed to the frontend. Must be positive; kept
    /// signed so that invalid values can be reported instead of wrapping.
    pub scale: i32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        VideoConfig {
            frontend: None,
            scale: DEFAULT_SCALE,
        }
    }
}

impl VideoConfig {
    /// Selects `frontend` with the default scale.
    pub fn with_frontend(frontend: impl Into<String>) -> Self {
        VideoConfig {
            frontend: Some(frontend.into()),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse video configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}
