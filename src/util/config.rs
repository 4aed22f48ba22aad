//! Configuration file support for Gantry.
//!
//! Gantry supports two configuration file locations:
//! - Global: `~/.gantry/config.toml` - User-wide defaults
//! - Project: `gantry.toml` in the project root
//!
//! Project config takes precedence over global config. The config carries
//! the project-wide default toolchain and extra detection roots; per-task
//! overrides never live here, they arrive as properties.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::spec::ToolchainSpec;
use crate::core::version::LanguageVersion;

/// Name of the project configuration file.
pub const PROJECT_CONFIG_NAME: &str = "gantry.toml";

/// Gantry configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default toolchain settings
    pub toolchain: ToolchainDefaults,

    /// Toolchain detection settings
    pub detection: DetectionConfig,
}

/// Project-wide default toolchain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainDefaults {
    /// Default language version for all tasks (e.g. 17)
    pub version: Option<LanguageVersion>,

    /// Preferred vendor (informational)
    pub vendor: Option<String>,
}

/// Settings for installed-toolchain detection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Extra installation roots to scan, in addition to the platform's
    /// conventional locations
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// Scan only the configured roots, skipping conventional locations
    #[serde(default)]
    pub roots_only: bool,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.toolchain.version.is_some() {
            self.toolchain.version = other.toolchain.version;
        }
        if other.toolchain.vendor.is_some() {
            self.toolchain.vendor = other.toolchain.vendor;
        }
        if !other.detection.roots.is_empty() {
            self.detection.roots = other.detection.roots;
        }
        if other.detection.roots_only {
            self.detection.roots_only = true;
        }
    }

    /// The default toolchain spec this config describes.
    ///
    /// Unconstrained when no default version is configured.
    pub fn default_spec(&self) -> ToolchainSpec {
        ToolchainSpec {
            language_version: self.toolchain.version,
            vendor: self.toolchain.vendor.clone(),
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (gantry.toml)
/// 2. Global config (~/.gantry/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        let global = Config::load_or_default(global_path);
        config.merge(global);
    }

    if project_path.exists() {
        let project = Config::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Get the global gantry config directory (~/.gantry).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".gantry"))
}

/// Get the global config path (~/.gantry/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (<root>/gantry.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_CONFIG_NAME)
}
