//! `gantry toolchains` command

use anyhow::Result;

use gantry::core::tool::ToolKind;
use gantry::provision::{BuildEnvironment, HostRuntime};

use crate::cli::ToolchainsArgs;
use crate::commands::{load_effective_config, service_from_config};

pub fn execute(args: ToolchainsArgs) -> Result<()> {
    let config = load_effective_config(args.config.as_ref())?;
    let service = service_from_config(&config);

    println!("Installed toolchains:");
    if service.installed().is_empty() {
        println!("  (none detected)");
    }
    for toolchain in service.installed() {
        match &toolchain.vendor {
            Some(vendor) => println!(
                "  {:>3}  {}  {} ({})",
                toolchain.language_version.get(),
                toolchain.full_version,
                toolchain.home.display(),
                vendor
            ),
            None => println!(
                "  {:>3}  {}  {}",
                toolchain.language_version.get(),
                toolchain.full_version,
                toolchain.home.display()
            ),
        }
    }

    println!();
    println!("Build runtime:");
    match HostRuntime::from_env().bundled_tool(ToolKind::Launcher) {
        Ok(tool) => match tool.language_version {
            Some(version) => println!("  {:>3}  {}", version.get(), tool.home.display()),
            None => println!("   ??  {}", tool.home.display()),
        },
        Err(e) => println!("  not found ({e})"),
    }

    Ok(())
}
