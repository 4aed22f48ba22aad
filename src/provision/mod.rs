//! Toolchain provisioning.
//!
//! The inference engine consumes two capabilities defined here: a
//! [`ToolchainService`] that locates a tool matching a spec, and a
//! [`BuildEnvironment`] exposing the runtime the build process itself runs
//! on. [`LocalToolchainService`] backs the service with JDK installations
//! detected on the local machine; it locates, but never installs.

use thiserror::Error;

use crate::core::spec::ToolchainSpec;
use crate::core::tool::{Tool, ToolKind};

pub mod detect;
pub mod environment;
pub mod service;

pub use detect::{default_detection_roots, scan_roots, DetectedToolchain};
pub use environment::HostRuntime;
pub use service::LocalToolchainService;

/// Error raised by a provisioning collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProvisioningError {
    /// No installed toolchain satisfies the request and auto-installation
    /// is not available.
    #[error("no installed toolchain provides a {kind} for {spec}")]
    NoMatchingToolchain {
        /// The requested tool kind.
        kind: ToolKind,
        /// The spec that could not be satisfied.
        spec: ToolchainSpec,
    },

    /// The runtime executing the build could not be located.
    #[error("cannot locate the build runtime: {reason}")]
    RuntimeUnavailable {
        /// Why the runtime lookup failed.
        reason: String,
    },
}

/// Locates a tool of a requested kind matching a toolchain spec.
///
/// `Ok(None)` means "nothing matches and nothing can be installed"; the
/// caller decides whether that is fatal. Implementations must not mutate
/// shared state on lookup, as handles for independent tasks may resolve
/// concurrently.
pub trait ToolchainService: Send + Sync {
    /// Find a tool matching the spec, or `None` if unresolvable.
    fn find_tool(
        &self,
        kind: ToolKind,
        spec: &ToolchainSpec,
    ) -> Result<Option<Tool>, ProvisioningError>;
}

/// The runtime the build process itself is executing on.
pub trait BuildEnvironment: Send + Sync {
    /// The tool of the given kind bundled with the build runtime.
    fn bundled_tool(&self, kind: ToolKind) -> Result<Tool, ProvisioningError>;
}
