//! The build process's own runtime.
//!
//! The `env` selector resolves tools from whatever JDK is executing the
//! build, located via `JAVA_HOME` or, failing that, the `java` executable on
//! `PATH`. This path never touches the provisioning service, so it works
//! even when no matching toolchain is installed anywhere.

use std::path::{Path, PathBuf};

use crate::core::tool::{Tool, ToolKind, ToolOrigin};
use crate::provision::detect;
use crate::provision::{BuildEnvironment, ProvisioningError};

/// The runtime executing the current process.
#[derive(Debug, Clone, Default)]
pub struct HostRuntime {
    /// Pinned home directory, bypassing environment lookup.
    home: Option<PathBuf>,
}

impl HostRuntime {
    /// Locate the runtime from the process environment
    /// (`JAVA_HOME`, then `java` on `PATH`).
    pub fn from_env() -> Self {
        HostRuntime { home: None }
    }

    /// A runtime rooted at a known home directory.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        HostRuntime {
            home: Some(home.into()),
        }
    }

    /// Resolve the runtime's home directory.
    pub fn home(&self) -> Result<PathBuf, ProvisioningError> {
        if let Some(home) = &self.home {
            return Ok(home.clone());
        }

        if let Some(java_home) = std::env::var_os("JAVA_HOME") {
            let home = PathBuf::from(java_home);
            if home.is_dir() {
                return Ok(home);
            }
            return Err(ProvisioningError::RuntimeUnavailable {
                reason: format!("JAVA_HOME points to missing directory {}", home.display()),
            });
        }

        // JAVA_HOME unset: walk up from the launcher on PATH
        // (<home>/bin/java).
        let java = which::which("java").map_err(|_| ProvisioningError::RuntimeUnavailable {
            reason: "JAVA_HOME is not set and no `java` found on PATH".to_string(),
        })?;

        java.parent()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .ok_or_else(|| ProvisioningError::RuntimeUnavailable {
                reason: format!("cannot derive a home directory from {}", java.display()),
            })
    }
}

impl BuildEnvironment for HostRuntime {
    fn bundled_tool(&self, kind: ToolKind) -> Result<Tool, ProvisioningError> {
        let home = self.home()?;

        let executable = kind.executable_in(&home);
        if !executable.is_file() {
            return Err(ProvisioningError::RuntimeUnavailable {
                reason: format!("build runtime has no {} at {}", kind, executable.display()),
            });
        }

        // The version is informational here; a runtime without release
        // metadata is still usable.
        let language_version = detect::detect_at(&home).map(|t| t.language_version);

        Ok(Tool {
            kind,
            executable,
            home,
            language_version,
            origin: ToolOrigin::BuildRuntime,
        })
    }
}
