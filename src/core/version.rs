//! Java language versions.
//!
//! A language version is the major release number of the Java platform
//! (8, 11, 17, 21, ...). Feature/interim/patch components are not part of
//! the model; toolchain matching is by major version only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a raw override value cannot be read as a language version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid toolchain version `{raw}` (expected a positive integer or `env`)")]
pub struct InvalidVersionError {
    /// The raw value as supplied.
    pub raw: String,
}

impl InvalidVersionError {
    pub(crate) fn new(raw: impl Into<String>) -> Self {
        InvalidVersionError { raw: raw.into() }
    }
}

/// A Java language version (major release number).
///
/// Always strictly positive; `LanguageVersion::new(0)` is rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct LanguageVersion(u32);

impl LanguageVersion {
    /// Create a language version, rejecting zero.
    pub fn new(version: u32) -> Option<Self> {
        if version == 0 {
            None
        } else {
            Some(LanguageVersion(version))
        }
    }

    /// Get the version as an integer.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for LanguageVersion {
    type Error = InvalidVersionError;

    fn try_from(version: u32) -> Result<Self, Self::Error> {
        LanguageVersion::new(version)
            .ok_or_else(|| InvalidVersionError::new(version.to_string()))
    }
}

impl From<LanguageVersion> for u32 {
    fn from(version: LanguageVersion) -> u32 {
        version.0
    }
}

impl FromStr for LanguageVersion {
    type Err = InvalidVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .ok()
            .and_then(LanguageVersion::new)
            .ok_or_else(|| InvalidVersionError::new(s))
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_versions() {
        for raw in ["8", "11", "17", "21"] {
            let version: LanguageVersion = raw.parse().unwrap();
            assert_eq!(version.to_string(), raw);
        }
    }

    #[test]
    fn test_parse_rejects_zero() {
        assert!("0".parse::<LanguageVersion>().is_err());
        assert!(LanguageVersion::new(0).is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for raw in ["", "abc", "-8", "8.1", "17 ", "env8"] {
            let err = raw.parse::<LanguageVersion>().unwrap_err();
            assert_eq!(err.raw, raw);
        }
    }

    #[test]
    fn test_error_message_names_the_value() {
        let err = "abc".parse::<LanguageVersion>().unwrap_err();
        assert!(err.to_string().contains("`abc`"));
    }

    #[test]
    fn test_ordering() {
        let v8: LanguageVersion = "8".parse().unwrap();
        let v17: LanguageVersion = "17".parse().unwrap();
        assert!(v8 < v17);
    }
}
