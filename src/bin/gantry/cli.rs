//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Gantry - Per-task Java toolchain switching for build pipelines
#[derive(Parser)]
#[command(name = "gantry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show which toolchain tool each task would use
    Resolve(ResolveArgs),

    /// List installed toolchains and the build runtime
    Toolchains(ToolchainsArgs),
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Tasks to resolve, as NAME or NAME:KIND (compile, exec, javadoc, test).
    /// With no KIND the kind is guessed from the name.
    pub tasks: Vec<String>,

    /// Override property, e.g. -P toolchain.test.version=17 (repeatable)
    #[arg(short = 'P', long = "property", value_name = "KEY=VALUE")]
    pub properties: Vec<String>,

    /// Project config file (defaults to ./gantry.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ToolchainsArgs {
    /// Project config file (defaults to ./gantry.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
