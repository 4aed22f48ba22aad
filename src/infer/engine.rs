//! Toolchain inference.
//!
//! Given a task's override property, the project default spec, and a
//! provisioning capability, produce a deferred handle to the selected tool.
//! Candidates are considered in order:
//!
//! 1. An explicit version override selects a toolchain with exactly that
//!    language version.
//! 2. The `env` override selects the runtime executing the build itself,
//!    without consulting the provisioning service.
//! 3. With no override, the project default spec is used when it carries a
//!    language version.
//! 4. Otherwise an unconstrained request is made ("any toolchain"), which
//!    services typically satisfy with the build runtime.
//!
//! Nothing is looked up or provisioned until the handle is first forced.

use std::sync::Arc;

use thiserror::Error;

use crate::core::spec::ToolchainSpec;
use crate::core::task::TaskKind;
use crate::core::tool::{Tool, ToolKind};
use crate::core::version::InvalidVersionError;
use crate::infer::deferred::Deferred;
use crate::infer::properties::{version_property_key, PropertyStore};
use crate::infer::selector::ToolchainSelector;
use crate::provision::{BuildEnvironment, ProvisioningError, ToolchainService};

/// Error produced when forcing an inferred tool handle.
///
/// Clone-able so a memoized failure reads identically on every force.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferError {
    /// The override property value could not be read as a version.
    #[error(transparent)]
    InvalidVersion(#[from] InvalidVersionError),

    /// The provisioning collaborator could not supply a tool.
    #[error(transparent)]
    Provisioning(#[from] ProvisioningError),
}

/// A deferred handle to an inferred tool.
pub type ToolHandle = Deferred<Result<Tool, InferError>>;

/// Infer a tool of the given kind for a task.
///
/// The returned handle captures its inputs and performs no work until
/// forced; the override property is read and classified fresh at force time.
pub fn inferred_tool(
    task_name: &str,
    kind: ToolKind,
    properties: Arc<dyn PropertyStore>,
    default_spec: ToolchainSpec,
    service: Arc<dyn ToolchainService>,
    environment: Arc<dyn BuildEnvironment>,
) -> ToolHandle {
    let key = version_property_key(task_name);
    let task = task_name.to_string();

    Deferred::new(move || {
        let raw = properties.lookup(&key);
        let selector = ToolchainSelector::classify(raw.as_deref())?;

        match selector {
            ToolchainSelector::Explicit(version) => {
                let spec = ToolchainSpec::for_version(version);
                tracing::debug!(task = %task, %kind, %version, "toolchain override");
                request(service.as_ref(), kind, &spec)
            }
            ToolchainSelector::EnvironmentDefault => {
                tracing::debug!(task = %task, %kind, "using build runtime");
                Ok(environment.bundled_tool(kind)?)
            }
            ToolchainSelector::Unset if !default_spec.is_unconstrained() => {
                tracing::debug!(task = %task, %kind, spec = %default_spec, "using project default");
                request(service.as_ref(), kind, &default_spec)
            }
            ToolchainSelector::Unset => {
                tracing::debug!(task = %task, %kind, "no override and no default");
                request(service.as_ref(), kind, &ToolchainSpec::unconstrained())
            }
        }
    })
}

/// Request a tool from the service, turning "no value" into a loud error.
fn request(
    service: &dyn ToolchainService,
    kind: ToolKind,
    spec: &ToolchainSpec,
) -> Result<Tool, InferError> {
    match service.find_tool(kind, spec)? {
        Some(tool) => Ok(tool),
        None => Err(ProvisioningError::NoMatchingToolchain {
            kind,
            spec: spec.clone(),
        }
        .into()),
    }
}

/// Infer the compiler for a task.
pub fn inferred_compiler(
    task_name: &str,
    properties: Arc<dyn PropertyStore>,
    default_spec: ToolchainSpec,
    service: Arc<dyn ToolchainService>,
    environment: Arc<dyn BuildEnvironment>,
) -> ToolHandle {
    inferred_tool(
        task_name,
        ToolKind::Compiler,
        properties,
        default_spec,
        service,
        environment,
    )
}

/// Infer the launcher for a task.
pub fn inferred_launcher(
    task_name: &str,
    properties: Arc<dyn PropertyStore>,
    default_spec: ToolchainSpec,
    service: Arc<dyn ToolchainService>,
    environment: Arc<dyn BuildEnvironment>,
) -> ToolHandle {
    inferred_tool(
        task_name,
        ToolKind::Launcher,
        properties,
        default_spec,
        service,
        environment,
    )
}

/// Infer the javadoc tool for a task.
pub fn inferred_javadoc_tool(
    task_name: &str,
    properties: Arc<dyn PropertyStore>,
    default_spec: ToolchainSpec,
    service: Arc<dyn ToolchainService>,
    environment: Arc<dyn BuildEnvironment>,
) -> ToolHandle {
    inferred_tool(
        task_name,
        ToolKind::JavadocTool,
        properties,
        default_spec,
        service,
        environment,
    )
}

/// Infer the appropriate tool for a task of a known kind.
///
/// Compile tasks get a compiler, exec and test tasks a launcher, javadoc
/// tasks the javadoc tool.
pub fn inferred_tool_for_task(
    task_name: &str,
    task_kind: TaskKind,
    properties: Arc<dyn PropertyStore>,
    default_spec: ToolchainSpec,
    service: Arc<dyn ToolchainService>,
    environment: Arc<dyn BuildEnvironment>,
) -> ToolHandle {
    inferred_tool(
        task_name,
        task_kind.tool_kind(),
        properties,
        default_spec,
        service,
        environment,
    )
}
