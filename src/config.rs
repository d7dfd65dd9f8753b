// Wiring configuration
//
// Sources, lowest precedence first:
// 1. Built-in defaults
// 2. JSON file at $WIRING_CONFIG (default "wiring.json"), skipped if absent
// 3. WIRING_GENERIC_SCOPE environment variable (.env loaded via dotenvy)

use crate::binding::Scope;
use crate::error::{Result, WiringError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "wiring.json";

/// Settings that influence how the graph is composed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WiringConfig {
    /// Scope of the `generic` binding
    pub generic_scope: Scope,
}

impl WiringConfig {
    /// Load configuration from the environment and the config file
    ///
    /// Environment Variables:
    /// - WIRING_CONFIG (optional): path to the JSON config file
    /// - WIRING_GENERIC_SCOPE (optional): "prototype" or "singleton"
    ///
    /// # Errors
    /// - Config file exists but cannot be read or parsed
    /// - WIRING_GENERIC_SCOPE holds an unknown scope
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = std::env::var("WIRING_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        let scope_override = std::env::var("WIRING_GENERIC_SCOPE").ok();

        Self::resolve(&path, scope_override.as_deref())
    }

    /// Load from `path` if it exists, then apply an optional scope override
    pub fn resolve(path: &Path, scope_override: Option<&str>) -> Result<Self> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!("No wiring config at {}, using defaults", path.display());
            Self::default()
        };

        if let Some(raw) = scope_override {
            config.generic_scope = raw.parse().map_err(|_| {
                WiringError::EnvError(format!(
                    "WIRING_GENERIC_SCOPE must be 'prototype' or 'singleton', got '{}'",
                    raw
                ))
            })?;
        }

        Ok(config)
    }

    /// Parse a JSON config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        tracing::info!("Loaded wiring config from {}", path.display());
        Ok(config)
    }
}
