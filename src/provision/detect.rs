//! Installed-JDK detection.
//!
//! Detection scans conventional installation roots and reads each
//! candidate's `release` metadata file to learn its language version and
//! vendor. Candidates without a readable `release` file or a `java`
//! executable are skipped with a warning.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::tool::{Tool, ToolKind, ToolOrigin};
use crate::core::version::LanguageVersion;

/// An installed JDK found by detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedToolchain {
    /// Installation home (the directory containing `bin/` and `release`).
    pub home: PathBuf,
    /// Major language version.
    pub language_version: LanguageVersion,
    /// Full version string from the `release` file (e.g. `17.0.2`).
    pub full_version: String,
    /// Vendor, when the `release` file names one.
    pub vendor: Option<String>,
}

impl DetectedToolchain {
    /// Get a tool of this toolchain.
    pub fn tool(&self, kind: ToolKind) -> Tool {
        Tool::in_home(
            kind,
            self.home.clone(),
            Some(self.language_version),
            ToolOrigin::Provisioned,
        )
    }
}

/// Conventional JDK installation roots for the current platform.
///
/// Distribution package dirs, the macOS JVM bundle dir, and the per-user
/// dirs used by sdkman and IntelliJ-managed downloads.
pub fn default_detection_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if cfg!(target_os = "macos") {
        roots.push(PathBuf::from("/Library/Java/JavaVirtualMachines"));
    } else if cfg!(unix) {
        roots.push(PathBuf::from("/usr/lib/jvm"));
        roots.push(PathBuf::from("/usr/java"));
    } else if cfg!(windows) {
        roots.push(PathBuf::from("C:\\Program Files\\Java"));
    }

    if let Some(base) = directories::BaseDirs::new() {
        let home = base.home_dir();
        roots.push(home.join(".sdkman").join("candidates").join("java"));
        roots.push(home.join(".jdks"));
    }

    roots
}

/// Scan installation roots for JDKs.
///
/// Results are ordered newest-version-first; ties are broken by home path
/// so the order is stable across runs.
pub fn scan_roots(roots: &[PathBuf]) -> Vec<DetectedToolchain> {
    let mut found = Vec::new();

    for root in roots {
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            if let Some(toolchain) = detect_at(&path) {
                tracing::debug!(
                    home = %toolchain.home.display(),
                    version = %toolchain.full_version,
                    "detected toolchain"
                );
                found.push(toolchain);
            }
        }
    }

    found.sort_by(|a, b| {
        b.language_version
            .cmp(&a.language_version)
            .then_with(|| a.home.cmp(&b.home))
    });
    found.dedup_by(|a, b| a.home == b.home);
    found
}

/// Inspect a single candidate directory.
///
/// Accepts either a JDK home directly or a macOS bundle
/// (`<name>/Contents/Home`).
pub fn detect_at(path: &Path) -> Option<DetectedToolchain> {
    let home = if path.join("release").is_file() {
        path.to_path_buf()
    } else {
        let bundled = path.join("Contents").join("Home");
        if bundled.join("release").is_file() {
            bundled
        } else {
            return None;
        }
    };

    if !ToolKind::Launcher.executable_in(&home).is_file() {
        tracing::warn!(home = %home.display(), "toolchain has no java executable, skipping");
        return None;
    }

    let release = parse_release_file(&home.join("release"))?;
    let Some(language_version) = major_version_of(&release.java_version) else {
        tracing::warn!(
            home = %home.display(),
            version = %release.java_version,
            "unrecognized JAVA_VERSION, skipping"
        );
        return None;
    };

    Some(DetectedToolchain {
        home,
        language_version,
        full_version: release.java_version,
        vendor: release.implementor,
    })
}

struct ReleaseInfo {
    java_version: String,
    implementor: Option<String>,
}

/// Parse a JDK `release` file (`KEY="value"` lines).
fn parse_release_file(path: &Path) -> Option<ReleaseInfo> {
    let contents = fs::read_to_string(path).ok()?;

    let mut java_version = None;
    let mut implementor = None;

    for line in contents.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches('"');
        match key.trim() {
            "JAVA_VERSION" => java_version = Some(value.to_string()),
            "IMPLEMENTOR" => implementor = Some(value.to_string()),
            _ => {}
        }
    }

    Some(ReleaseInfo {
        java_version: java_version?,
        implementor,
    })
}

/// Extract the major language version from a full version string.
///
/// Handles both the modern scheme (`17.0.2`, `9`) and the legacy `1.x`
/// scheme (`1.8.0_292` is language version 8).
fn major_version_of(full: &str) -> Option<LanguageVersion> {
    let rest = full.strip_prefix("1.").unwrap_or(full);
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn fake_jdk(root: &Path, name: &str, release: &str) -> PathBuf {
        let home = root.join(name);
        fs::create_dir_all(home.join("bin")).unwrap();
        fs::write(home.join("release"), release).unwrap();
        let java = ToolKind::Launcher.executable_in(&home);
        fs::write(java, "").unwrap();
        home
    }

    #[test]
    fn test_major_version_of() {
        assert_eq!(major_version_of("17.0.2"), LanguageVersion::new(17));
        assert_eq!(major_version_of("9"), LanguageVersion::new(9));
        assert_eq!(major_version_of("21-ea"), LanguageVersion::new(21));
        assert_eq!(major_version_of("1.8.0_292"), LanguageVersion::new(8));
        assert_eq!(major_version_of("garbage"), None);
    }

    #[test]
    fn test_detect_at_reads_release_metadata() {
        let tmp = TempDir::new().unwrap();
        let home = fake_jdk(
            tmp.path(),
            "jdk-17",
            "IMPLEMENTOR=\"Eclipse Adoptium\"\nJAVA_VERSION=\"17.0.2\"\n",
        );

        let toolchain = detect_at(&home).unwrap();
        assert_eq!(toolchain.language_version, LanguageVersion::new(17).unwrap());
        assert_eq!(toolchain.full_version, "17.0.2");
        assert_eq!(toolchain.vendor.as_deref(), Some("Eclipse Adoptium"));
    }

    #[test]
    fn test_detect_at_macos_bundle_layout() {
        let tmp = TempDir::new().unwrap();
        let bundle = tmp.path().join("temurin-21.jdk");
        fake_jdk(
            &bundle,
            "Contents/Home",
            "JAVA_VERSION=\"21.0.1\"\n",
        );

        let toolchain = detect_at(&bundle).unwrap();
        assert_eq!(toolchain.language_version, LanguageVersion::new(21).unwrap());
        assert!(toolchain.home.ends_with("Contents/Home"));
    }

    #[test]
    fn test_detect_at_skips_incomplete_installs() {
        let tmp = TempDir::new().unwrap();

        // No release file.
        let bare = tmp.path().join("not-a-jdk");
        fs::create_dir_all(bare.join("bin")).unwrap();
        assert!(detect_at(&bare).is_none());

        // Release file but no java executable.
        let headless = tmp.path().join("jre-stripped");
        fs::create_dir_all(&headless).unwrap();
        fs::write(headless.join("release"), "JAVA_VERSION=\"17\"\n").unwrap();
        assert!(detect_at(&headless).is_none());
    }

    #[test]
    fn test_scan_roots_orders_newest_first() {
        let tmp = TempDir::new().unwrap();
        fake_jdk(tmp.path(), "jdk-8", "JAVA_VERSION=\"1.8.0_292\"\n");
        fake_jdk(tmp.path(), "jdk-21", "JAVA_VERSION=\"21.0.1\"\n");
        fake_jdk(tmp.path(), "jdk-17", "JAVA_VERSION=\"17.0.2\"\n");

        let found = scan_roots(&[tmp.path().to_path_buf()]);
        let versions: Vec<u32> = found.iter().map(|t| t.language_version.get()).collect();
        assert_eq!(versions, vec![21, 17, 8]);
    }

    #[test]
    fn test_scan_roots_ignores_missing_root() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does-not-exist");
        assert!(scan_roots(&[missing]).is_empty());
    }
}
