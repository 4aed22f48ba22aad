//! Toolchain inference for build tasks.
//!
//! This module is the decision core: it reads per-task override properties,
//! classifies them into a selector, and produces deferred handles to the
//! selected tools.
//!
//! Selection priority for a task:
//! 1. Explicit `toolchain.<task>.version=<N>` override
//! 2. `toolchain.<task>.version=env` (the runtime executing the build)
//! 3. The project-wide default toolchain spec
//! 4. Any available toolchain

pub mod deferred;
pub mod engine;
pub mod properties;
pub mod selector;

pub use deferred::Deferred;
pub use engine::{
    inferred_compiler, inferred_javadoc_tool, inferred_launcher, inferred_tool,
    inferred_tool_for_task, InferError, ToolHandle,
};
pub use properties::{
    version_override, version_property_key, LayeredPropertyStore, MapPropertyStore,
    PropertyStore, PROPERTY_PREFIX, PROPERTY_VERSION_SUFFIX,
};
pub use selector::{ToolchainSelector, ENVIRONMENT_TOOLCHAIN_SELECTOR};
