use anyhow::{Context, Result};
use console::style;
use fastutor_core::config::FasTutorConfig;
use std::path::Path;

/// Handle the init command
pub fn handle_init_command(workspace: &Path, force: bool) -> Result<()> {
    println!("{}", style("Initialize fastutor configuration").blue().bold());
    println!("Workspace: {}", workspace.display());

    let created = FasTutorConfig::bootstrap_project(workspace, force)
        .with_context(|| "failed to initialize configuration files")?;

    if created.is_empty() {
        println!(
            "{}",
            style("fastutor.toml already exists; use --force to overwrite").yellow()
        );
    } else {
        for file in created {
            println!("{} {file}", style("Created").green());
        }
    }
    Ok(())
}
