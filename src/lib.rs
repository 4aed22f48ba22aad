//! Gantry - Per-task Java toolchain switching for build pipelines
//!
//! This crate lets individual build tasks select a Java toolchain
//! (compiler, launcher, javadoc tool) at invocation time through
//! `toolchain.<task>.version` properties, overriding the project-wide
//! default without touching build configuration. Selection is deferred:
//! handles are cheap to create at configuration time and only hit the
//! provisioning service when a task actually reads its tool.

pub mod core;
pub mod infer;
pub mod ops;
pub mod provision;
pub mod util;

pub use self::core::{
    InvalidVersionError, LanguageVersion, TaskKind, Tool, ToolKind, ToolOrigin, ToolchainSpec,
};

pub use infer::{
    inferred_compiler, inferred_javadoc_tool, inferred_launcher, inferred_tool, Deferred,
    InferError, PropertyStore, ToolHandle, ToolchainSelector,
};
pub use provision::{BuildEnvironment, LocalToolchainService, ProvisioningError, ToolchainService};
pub use util::Config;
