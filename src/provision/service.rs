//! Local toolchain service.

use std::path::PathBuf;
use std::sync::Arc;

use crate::core::spec::ToolchainSpec;
use crate::core::tool::{Tool, ToolKind};
use crate::provision::detect::{default_detection_roots, scan_roots, DetectedToolchain};
use crate::provision::environment::HostRuntime;
use crate::provision::{BuildEnvironment, ProvisioningError, ToolchainService};

/// A toolchain service backed by JDKs installed on the local machine.
///
/// Constrained requests match on language version against the detected
/// installs. Unconstrained requests prefer the build runtime, falling back
/// to the newest install. Nothing is ever downloaded.
pub struct LocalToolchainService {
    installed: Vec<DetectedToolchain>,
    runtime: Arc<dyn BuildEnvironment>,
}

impl LocalToolchainService {
    /// Create a service over a known set of installs.
    pub fn new(installed: Vec<DetectedToolchain>, runtime: Arc<dyn BuildEnvironment>) -> Self {
        LocalToolchainService { installed, runtime }
    }

    /// Detect installs under the platform's conventional roots plus any
    /// extra configured roots.
    pub fn detect(extra_roots: &[PathBuf]) -> Self {
        let mut roots = default_detection_roots();
        roots.extend_from_slice(extra_roots);
        let installed = scan_roots(&roots);
        tracing::info!(count = installed.len(), "detected installed toolchains");
        LocalToolchainService::new(installed, Arc::new(HostRuntime::from_env()))
    }

    /// Detect installs under the given roots only.
    ///
    /// Used when configuration replaces the conventional search locations.
    pub fn detect_in(roots: &[PathBuf]) -> Self {
        let installed = scan_roots(roots);
        tracing::info!(count = installed.len(), "detected installed toolchains");
        LocalToolchainService::new(installed, Arc::new(HostRuntime::from_env()))
    }

    /// The detected installs, newest first.
    pub fn installed(&self) -> &[DetectedToolchain] {
        &self.installed
    }
}

impl ToolchainService for LocalToolchainService {
    fn find_tool(
        &self,
        kind: ToolKind,
        spec: &ToolchainSpec,
    ) -> Result<Option<Tool>, ProvisioningError> {
        match spec.language_version {
            Some(version) => {
                // Installs are newest-first, so the first match carries the
                // highest full version for that language version.
                let found = self
                    .installed
                    .iter()
                    .find(|t| t.language_version == version);
                Ok(found.map(|t| t.tool(kind)))
            }
            None => {
                match self.runtime.bundled_tool(kind) {
                    Ok(tool) => Ok(Some(tool)),
                    Err(err) => {
                        tracing::debug!(%err, "build runtime unavailable, trying installs");
                        Ok(self.installed.first().map(|t| t.tool(kind)))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;
    use crate::core::tool::ToolOrigin;
    use crate::core::version::LanguageVersion;
    use crate::provision::detect;

    fn fake_jdk(root: &Path, name: &str, version: &str) -> DetectedToolchain {
        let home = root.join(name);
        fs::create_dir_all(home.join("bin")).unwrap();
        fs::write(
            home.join("release"),
            format!("JAVA_VERSION=\"{version}\"\n"),
        )
        .unwrap();
        fs::write(ToolKind::Launcher.executable_in(&home), "").unwrap();
        detect::detect_at(&home).unwrap()
    }

    struct NoRuntime;

    impl BuildEnvironment for NoRuntime {
        fn bundled_tool(&self, _kind: ToolKind) -> Result<Tool, ProvisioningError> {
            Err(ProvisioningError::RuntimeUnavailable {
                reason: "unavailable in test".to_string(),
            })
        }
    }

    #[test]
    fn test_constrained_request_matches_exact_version() {
        let tmp = TempDir::new().unwrap();
        let installed = vec![
            fake_jdk(tmp.path(), "jdk-17", "17.0.2"),
            fake_jdk(tmp.path(), "jdk-8", "1.8.0_292"),
        ];
        let service = LocalToolchainService::new(installed, Arc::new(NoRuntime));

        let spec = ToolchainSpec::for_version(LanguageVersion::new(8).unwrap());
        let tool = service
            .find_tool(ToolKind::Compiler, &spec)
            .unwrap()
            .unwrap();
        assert_eq!(tool.language_version.map(|v| v.get()), Some(8));
        assert_eq!(tool.origin, ToolOrigin::Provisioned);
    }

    #[test]
    fn test_constrained_request_without_match_yields_none() {
        let tmp = TempDir::new().unwrap();
        let installed = vec![fake_jdk(tmp.path(), "jdk-17", "17.0.2")];
        let service = LocalToolchainService::new(installed, Arc::new(NoRuntime));

        let spec = ToolchainSpec::for_version(LanguageVersion::new(11).unwrap());
        assert!(service.find_tool(ToolKind::Launcher, &spec).unwrap().is_none());
    }

    #[test]
    fn test_unconstrained_request_prefers_runtime() {
        let tmp = TempDir::new().unwrap();
        let runtime_home = fake_jdk(tmp.path(), "runtime", "21.0.1");
        let installed = vec![fake_jdk(tmp.path(), "jdk-17", "17.0.2")];
        let service = LocalToolchainService::new(
            installed,
            Arc::new(HostRuntime::with_home(&runtime_home.home)),
        );

        let tool = service
            .find_tool(ToolKind::Launcher, &ToolchainSpec::unconstrained())
            .unwrap()
            .unwrap();
        assert_eq!(tool.origin, ToolOrigin::BuildRuntime);
        assert_eq!(tool.language_version.map(|v| v.get()), Some(21));
    }

    #[test]
    fn test_unconstrained_request_falls_back_to_newest_install() {
        let tmp = TempDir::new().unwrap();
        let mut installed = vec![
            fake_jdk(tmp.path(), "jdk-17", "17.0.2"),
            fake_jdk(tmp.path(), "jdk-8", "1.8.0_292"),
        ];
        installed.sort_by(|a, b| b.language_version.cmp(&a.language_version));
        let service = LocalToolchainService::new(installed, Arc::new(NoRuntime));

        let tool = service
            .find_tool(ToolKind::Launcher, &ToolchainSpec::unconstrained())
            .unwrap()
            .unwrap();
        assert_eq!(tool.language_version.map(|v| v.get()), Some(17));
    }

    #[test]
    fn test_unconstrained_request_with_nothing_yields_none() {
        let service = LocalToolchainService::new(Vec::new(), Arc::new(NoRuntime));
        assert!(service
            .find_tool(ToolKind::Launcher, &ToolchainSpec::unconstrained())
            .unwrap()
            .is_none());
    }
}
