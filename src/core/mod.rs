//! Core data structures for Gantry.
//!
//! This module contains the foundational types used throughout Gantry:
//! - Language versions and toolchain specifications
//! - Tools (compiler, launcher, javadoc) and their origins
//! - Task kinds and the task-to-tool mapping

pub mod spec;
pub mod task;
pub mod tool;
pub mod version;

pub use spec::ToolchainSpec;
pub use task::{TaskKind, UnknownTaskKind};
pub use tool::{Tool, ToolKind, ToolOrigin};
pub use version::{InvalidVersionError, LanguageVersion};
