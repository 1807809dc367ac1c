//! fastutor - AAOIFI standards tutor for the terminal

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::AppContext;
use fastutor_core::cli::{Cli, Commands};
use fastutor_core::config::{ConfigManager, load_dotenv};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);
    load_dotenv();

    let workspace = args
        .workspace_root()
        .context("cannot determine current dir")?;

    let manager = match &args.config {
        Some(path) => ConfigManager::load_from_file(path),
        None => ConfigManager::load_from_workspace(&workspace),
    }
    .context("failed to load configuration")?;
    let config_path = manager.config_path().map(|p| p.display().to_string());
    let mut config = manager.into_config();
    args.apply_overrides(&mut config);

    let app = AppContext::new(workspace, config);
    let command = args.command();
    debug!(
        ?command,
        workspace = %app.workspace.display(),
        config = ?config_path,
        model = %app.config.llm.model,
        "starting"
    );

    match command {
        Commands::Standards => cli::handle_standards_command(&app),
        Commands::Glossary => cli::handle_glossary_command(&app),
        Commands::Init { force } => cli::handle_init_command(&app.workspace, force),
        command => {
            let tutor = app.tutor()?;
            match command {
                Commands::Explain { standard } => {
                    cli::handle_explain_command(&app, &tutor, &standard).await
                }
                Commands::Ask { question } => {
                    cli::handle_ask_command(&app, &tutor, &question.join(" ")).await
                }
                Commands::Tutorial { standard, answer } => {
                    cli::handle_tutorial_command(&app, &tutor, &standard, &answer).await
                }
                _ => cli::handle_interactive_command(&app, &tutor).await,
            }
        }
    }
}

/// Log to stderr so page output on stdout stays clean
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
