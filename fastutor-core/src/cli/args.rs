//! CLI argument parsing and configuration overrides

use crate::config::FasTutorConfig;
use crate::language::Language;
use clap::{ColorChoice, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Main CLI structure for fastutor
#[derive(Parser, Debug)]
#[command(
    name = "fastutor",
    version,
    about = "Islamic finance standards, simplified\n\nLearn AAOIFI FAS 4, 7, 10, 28 and 32 through worked examples, \
             model-generated explanations and graded exercises, in English or Arabic.\n\nQuick Start:\n  export OPENAI_API_KEY=\"your_key\"\n  fastutor",
    color = ColorChoice::Auto
)]
pub struct Cli {
    /// Interface and explanation language (en, ar)
    #[arg(long, short = 'l', global = true, value_name = "LANG")]
    pub language: Option<Language>,

    /// Model ID sent to the chat-completion API
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Environment variable holding the API key
    #[arg(long, global = true, value_name = "VAR")]
    pub api_key_env: Option<String>,

    /// Workspace searched for fastutor.toml and .fastutor/secrets.toml
    ///
    /// Default: current directory
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        value_hint = ValueHint::DirPath
    )]
    pub workspace: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file path, skipping the default search
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive session with the five tutor pages (default)
    Interactive,

    /// List the supported standards
    Standards,

    /// Show a standard's example scenario and a generated explanation
    ///
    /// Example: fastutor explain "FAS 10"
    Explain {
        /// Standard identifier, e.g. "FAS 10", fas10 or 10
        standard: String,
    },

    /// Answer a free-form question about Islamic finance
    ///
    /// Example: fastutor ask "What is the difference between Ijarah and Murabaha?"
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Print the Islamic finance glossary
    Glossary,

    /// Grade an answer to a standard's example scenario
    ///
    /// Example: fastutor tutorial 28 --answer "Recognise the asset at cost..."
    Tutorial {
        /// Standard identifier
        standard: String,

        /// Your solution to the scenario
        #[arg(long, short = 'a')]
        answer: String,
    },

    /// Write a sample fastutor.toml into the workspace
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    /// Whether the command calls the model and so needs an API key
    pub fn requires_model(&self) -> bool {
        !matches!(self, Self::Standards | Self::Glossary | Self::Init { .. })
    }
}

impl Cli {
    /// The command to run, defaulting to the interactive session
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Interactive)
    }

    /// Workspace root, falling back to the current directory
    pub fn workspace_root(&self) -> std::io::Result<PathBuf> {
        match &self.workspace {
            Some(path) => Ok(path.clone()),
            None => std::env::current_dir(),
        }
    }

    /// Apply command-line overrides on top of file configuration
    pub fn apply_overrides(&self, config: &mut FasTutorConfig) {
        if let Some(model) = &self.model {
            config.llm.model = model.clone();
        }
        if let Some(env) = &self.api_key_env {
            config.llm.api_key_env = env.clone();
        }
        if let Some(language) = self.language {
            config.ui.default_language = language;
        }
    }
}
