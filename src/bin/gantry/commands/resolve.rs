//! `gantry resolve` command

use std::sync::Arc;

use anyhow::{bail, Context, Result};

use gantry::core::task::TaskKind;
use gantry::infer::properties::MapPropertyStore;
use gantry::ops::resolve_tasks;
use gantry::provision::HostRuntime;

use crate::cli::ResolveArgs;
use crate::commands::{load_effective_config, service_from_config};

/// Task names resolved when none are given: the conventional task set a
/// Java build registers.
const DEFAULT_TASKS: &[&str] = &["compileJava", "test", "javadoc", "run"];

pub fn execute(args: ResolveArgs) -> Result<()> {
    let properties = parse_properties(&args.properties)?;
    let tasks = parse_tasks(&args.tasks)?;

    let config = load_effective_config(args.config.as_ref())?;
    let service = service_from_config(&config);

    let resolutions = resolve_tasks(
        &tasks,
        Arc::new(properties),
        config.default_spec(),
        Arc::new(service),
        Arc::new(HostRuntime::from_env()),
    );

    for resolution in &resolutions {
        let tool = resolution
            .handle
            .force()
            .as_ref()
            .map_err(Clone::clone)
            .with_context(|| {
                format!("failed to resolve a toolchain for task `{}`", resolution.task)
            })?;

        println!(
            "{} ({}): {} -> {}",
            resolution.task,
            resolution.task_kind,
            tool,
            tool.executable.display()
        );
    }

    Ok(())
}

/// Parse `-P key=value` pairs into a property store.
fn parse_properties(pairs: &[String]) -> Result<MapPropertyStore> {
    let mut store = MapPropertyStore::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("invalid property `{pair}` (expected KEY=VALUE)");
        };
        store.set(key, value);
    }
    Ok(store)
}

/// Parse `NAME` or `NAME:KIND` task arguments.
fn parse_tasks(args: &[String]) -> Result<Vec<(String, TaskKind)>> {
    let names: Vec<&str> = if args.is_empty() {
        DEFAULT_TASKS.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    names
        .into_iter()
        .map(|arg| match arg.split_once(':') {
            Some((name, kind)) => {
                let kind = kind
                    .parse()
                    .with_context(|| format!("invalid task `{arg}`"))?;
                Ok((name.to_string(), kind))
            }
            None => Ok((arg.to_string(), TaskKind::guess_from_name(arg))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use gantry::infer::properties::PropertyStore;

    use super::*;

    #[test]
    fn test_parse_properties() {
        let store = parse_properties(&["toolchain.test.version=17".to_string()]).unwrap();
        assert_eq!(
            store.lookup("toolchain.test.version"),
            Some("17".to_string())
        );
    }

    #[test]
    fn test_parse_properties_rejects_bare_key() {
        assert!(parse_properties(&["toolchain.test.version".to_string()]).is_err());
    }

    #[test]
    fn test_parse_tasks_with_explicit_kind() {
        let tasks = parse_tasks(&["run:exec".to_string()]).unwrap();
        assert_eq!(tasks, vec![("run".to_string(), TaskKind::Exec)]);
    }

    #[test]
    fn test_parse_tasks_guesses_kind() {
        let tasks = parse_tasks(&["compileJava".to_string(), "test".to_string()]).unwrap();
        assert_eq!(tasks[0].1, TaskKind::Compile);
        assert_eq!(tasks[1].1, TaskKind::Test);
    }

    #[test]
    fn test_default_task_set() {
        let tasks = parse_tasks(&[]).unwrap();
        let names: Vec<&str> = tasks.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, DEFAULT_TASKS);
    }
}
