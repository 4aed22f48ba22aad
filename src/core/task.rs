//! Build task kinds.
//!
//! Tasks are identified by an opaque name owned by the host build tool; the
//! kind decides which toolchain tool the task consumes.

use std::fmt;
use std::str::FromStr;

use crate::core::tool::ToolKind;

/// The kind of a build task, as far as toolchain selection is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Compiles Java sources.
    Compile,
    /// Runs a Java program.
    Exec,
    /// Generates API documentation.
    Javadoc,
    /// Runs tests on a JVM.
    Test,
}

impl TaskKind {
    /// The toolchain tool a task of this kind consumes.
    ///
    /// Test tasks run on a launcher, like exec tasks.
    pub fn tool_kind(self) -> ToolKind {
        match self {
            TaskKind::Compile => ToolKind::Compiler,
            TaskKind::Exec | TaskKind::Test => ToolKind::Launcher,
            TaskKind::Javadoc => ToolKind::JavadocTool,
        }
    }

    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Compile => "compile",
            TaskKind::Exec => "exec",
            TaskKind::Javadoc => "javadoc",
            TaskKind::Test => "test",
        }
    }

    /// Guess the kind from a conventional task name.
    ///
    /// Used when a caller supplies bare task names: `compileJava` is a
    /// compile task, `javadoc` a javadoc task, `test`/`integrationTest`
    /// test tasks, anything else an exec task.
    pub fn guess_from_name(name: &str) -> TaskKind {
        let lower = name.to_ascii_lowercase();
        if lower.starts_with("compile") {
            TaskKind::Compile
        } else if lower.contains("javadoc") {
            TaskKind::Javadoc
        } else if lower == "test" || lower.ends_with("test") || lower.ends_with("tests") {
            TaskKind::Test
        } else {
            TaskKind::Exec
        }
    }
}

impl FromStr for TaskKind {
    type Err = UnknownTaskKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compile" => Ok(TaskKind::Compile),
            "exec" | "run" => Ok(TaskKind::Exec),
            "javadoc" => Ok(TaskKind::Javadoc),
            "test" => Ok(TaskKind::Test),
            _ => Err(UnknownTaskKind {
                raw: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when parsing an unknown task kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task kind `{raw}` (expected compile, exec, javadoc, or test)")]
pub struct UnknownTaskKind {
    /// The raw value as supplied.
    pub raw: String,
}
