//! CLI command implementations.

pub mod resolve;
pub mod toolchains;

use std::path::PathBuf;

use gantry::util::config::{self, Config};

/// Load the effective configuration.
///
/// An explicit `--config` path replaces both lookup locations; otherwise the
/// project config in the current directory is merged over the global one.
pub fn load_effective_config(explicit: Option<&PathBuf>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    let cwd = std::env::current_dir()?;
    let project = config::project_config_path(&cwd);
    let global = config::global_config_path().unwrap_or_default();
    Ok(config::load_config(&global, &project))
}

/// Build the local toolchain service described by the config.
pub fn service_from_config(config: &Config) -> gantry::LocalToolchainService {
    if config.detection.roots_only {
        gantry::LocalToolchainService::detect_in(&config.detection.roots)
    } else {
        gantry::LocalToolchainService::detect(&config.detection.roots)
    }
}
