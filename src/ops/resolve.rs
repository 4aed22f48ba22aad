//! Task toolchain resolution.
//!
//! This is the wiring a host build tool performs at configuration time:
//! for every task of a known kind, attach a deferred handle to the inferred
//! tool. Handles are only forced when the task actually runs (or when an
//! inspection command asks for them), so configuring a build performs no
//! toolchain lookups.

use std::sync::Arc;

use crate::core::spec::ToolchainSpec;
use crate::core::task::TaskKind;
use crate::core::tool::ToolKind;
use crate::infer::engine::{inferred_tool_for_task, ToolHandle};
use crate::infer::properties::PropertyStore;
use crate::provision::{BuildEnvironment, ToolchainService};

/// A task paired with its inferred tool handle.
pub struct TaskResolution {
    /// Task name.
    pub task: String,
    /// Task kind.
    pub task_kind: TaskKind,
    /// The tool kind the task consumes.
    pub tool_kind: ToolKind,
    /// Deferred handle to the selected tool.
    pub handle: ToolHandle,
}

/// Configure toolchain inference for a set of tasks.
///
/// Returns one resolution per task, in input order. Nothing is resolved
/// yet; force each handle to trigger selection and provisioning.
pub fn resolve_tasks(
    tasks: &[(String, TaskKind)],
    properties: Arc<dyn PropertyStore>,
    default_spec: ToolchainSpec,
    service: Arc<dyn ToolchainService>,
    environment: Arc<dyn BuildEnvironment>,
) -> Vec<TaskResolution> {
    tasks
        .iter()
        .map(|(name, task_kind)| TaskResolution {
            task: name.clone(),
            task_kind: *task_kind,
            tool_kind: task_kind.tool_kind(),
            handle: inferred_tool_for_task(
                name,
                *task_kind,
                Arc::clone(&properties),
                default_spec.clone(),
                Arc::clone(&service),
                Arc::clone(&environment),
            ),
        })
        .collect()
}
