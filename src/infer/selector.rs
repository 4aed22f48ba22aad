//! Selector classification.
//!
//! The raw override value is classified in exactly one place so that the
//! compiler, launcher, and javadoc paths cannot drift apart.

use crate::core::version::{InvalidVersionError, LanguageVersion};

/// The reserved token selecting the runtime that executes the build itself.
pub const ENVIRONMENT_TOOLCHAIN_SELECTOR: &str = "env";

/// The resolved toolchain intent for one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolchainSelector {
    /// No override was supplied; defer to the project default.
    Unset,
    /// An explicit language version was supplied.
    Explicit(LanguageVersion),
    /// The `env` sentinel was supplied: use the build process's own runtime.
    EnvironmentDefault,
}

impl ToolchainSelector {
    /// Classify a raw override value.
    ///
    /// `None` means the property was not set at all. An empty string is a
    /// present, explicit value and fails version parsing; it must not be
    /// folded into `Unset`.
    pub fn classify(raw: Option<&str>) -> Result<Self, InvalidVersionError> {
        match raw {
            None => Ok(ToolchainSelector::Unset),
            Some(ENVIRONMENT_TOOLCHAIN_SELECTOR) => Ok(ToolchainSelector::EnvironmentDefault),
            Some(value) => value.parse().map(ToolchainSelector::Explicit),
        }
    }
}
