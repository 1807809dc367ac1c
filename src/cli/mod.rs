//! Command handlers for the fastutor binary
//!
//! Each subcommand lives in its own module; the interactive session reuses
//! the same page renderers as the one-shot commands.

pub mod ask;
pub mod explain;
pub mod glossary;
pub mod init;
pub mod interactive;
pub mod standards;
pub mod tutorial;

pub use ask::handle_ask_command;
pub use explain::handle_explain_command;
pub use glossary::handle_glossary_command;
pub use init::handle_init_command;
pub use interactive::handle_interactive_command;
pub use standards::handle_standards_command;
pub use tutorial::handle_tutorial_command;

use anyhow::{Context, Result};
use console::style;
use fastutor_core::config::{ApiKeySources, FasTutorConfig, get_api_key};
use fastutor_core::ui::{MarkdownRenderer, Spinner, UiText};
use fastutor_core::{Language, ProviderGateway, Tutor};
use std::fmt::Display;
use std::future::Future;
use std::path::PathBuf;

/// Resolved settings shared by every command
pub struct AppContext {
    pub workspace: PathBuf,
    pub config: FasTutorConfig,
    pub renderer: MarkdownRenderer,
}

impl AppContext {
    pub fn new(workspace: PathBuf, config: FasTutorConfig) -> Self {
        let renderer = MarkdownRenderer::new(config.ui.render_markdown);
        Self {
            workspace,
            config,
            renderer,
        }
    }

    pub fn language(&self) -> Language {
        self.config.ui.default_language
    }

    /// Build the tutor, failing immediately when no API key can be found
    pub fn tutor(&self) -> Result<Tutor> {
        let sources = ApiKeySources::for_workspace(&self.workspace)
            .with_env_var(self.config.llm.api_key_env.as_str())
            .with_config_value(self.config.llm.api_key.clone());
        let api_key = get_api_key(&sources).context("cannot start without an OpenAI API key")?;

        let gateway = ProviderGateway::openai(&self.config.llm, api_key);
        Ok(Tutor::new(Box::new(gateway)))
    }

    /// Print a `### heading` section followed by markdown body text
    pub fn print_section(&self, heading: &str, body: &str) {
        self.renderer.print(&format!("### {heading}\n\n{body}"));
    }
}

/// Page heading plus its one-line intro
pub fn print_page_header(heading: &str, intro: &str) {
    println!();
    println!("{}", style(heading).cyan().bold());
    println!("{}", style(intro).dim());
    println!();
}

pub fn print_error(language: Language, err: impl Display) {
    eprintln!(
        "{} {err}",
        style(format!("{}:", UiText::get(language).error_label)).red().bold()
    );
}

/// Await a model call with a spinner on screen
pub async fn with_spinner<F: Future>(message: &str, task: F) -> F::Output {
    let spinner = Spinner::new(message);
    let output = task.await;
    spinner.finish_and_clear();
    output
}
