//! Toolchain specifications.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::version::LanguageVersion;

/// A constraint describing which toolchain a task wants.
///
/// The language version is the only field the inference engine ever
/// constrains. The vendor is carried through from configuration and
/// installed-JDK metadata for display, but never filtered on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainSpec {
    /// Required language version, if any.
    pub language_version: Option<LanguageVersion>,

    /// Preferred vendor (informational).
    pub vendor: Option<String>,
}

impl ToolchainSpec {
    /// A spec with no constraints ("any toolchain").
    pub fn unconstrained() -> Self {
        ToolchainSpec::default()
    }

    /// A spec constrained to exactly one language version.
    pub fn for_version(version: LanguageVersion) -> Self {
        ToolchainSpec {
            language_version: Some(version),
            vendor: None,
        }
    }

    /// Whether this spec places no constraint on the toolchain.
    pub fn is_unconstrained(&self) -> bool {
        self.language_version.is_none()
    }
}

impl fmt::Display for ToolchainSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.language_version {
            Some(version) => write!(f, "language version {}", version),
            None => write!(f, "any language version"),
        }
    }
}
