use crate::config::constants::{env_vars, files, generation, models, urls};
use crate::error::{FasError, Result};
use crate::language::Language;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Text-generation service settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LlmConfig {
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Base URL of an OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Completion length cap, 0 lets the service decide
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Last-resort API key, prefer the environment or a secrets file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_model() -> String {
    models::openai::DEFAULT_MODEL.to_string()
}
fn default_temperature() -> f32 {
    generation::DEFAULT_TEMPERATURE
}
fn default_base_url() -> String {
    urls::OPENAI_API_BASE.to_string()
}
fn default_max_tokens() -> u32 {
    generation::DEFAULT_MAX_TOKENS
}
fn default_api_key_env() -> String {
    env_vars::OPENAI_API_KEY.to_string()
}
fn default_true() -> bool {
    true
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            base_url: default_base_url(),
            max_tokens: default_max_tokens(),
            api_key_env: default_api_key_env(),
            api_key: None,
        }
    }
}

impl LlmConfig {
    /// `max_tokens` as sent on the wire
    pub fn max_tokens_limit(&self) -> Option<u32> {
        (self.max_tokens > 0).then_some(self.max_tokens)
    }
}

/// Terminal presentation settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiConfig {
    /// Language the session starts in
    #[serde(default)]
    pub default_language: Language,

    /// Render generated text as terminal markdown instead of plain text
    #[serde(default = "default_true")]
    pub render_markdown: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            render_markdown: default_true(),
        }
    }
}

/// Main configuration structure for fastutor
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FasTutorConfig {
    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

impl FasTutorConfig {
    /// Write `fastutor.toml` into the workspace, keeping an existing file unless `force`
    pub fn bootstrap_project<P: AsRef<Path>>(
        workspace: P,
        force: bool,
    ) -> anyhow::Result<Vec<String>> {
        let config_path = workspace.as_ref().join(files::CONFIG_FILE);
        let mut created_files = Vec::new();

        if !config_path.exists() || force {
            Self::create_sample_config(&config_path)?;
            created_files.push(files::CONFIG_FILE.to_string());
        }

        Ok(created_files)
    }

    /// Create sample configuration file
    pub fn create_sample_config<P: AsRef<Path>>(output: P) -> anyhow::Result<()> {
        let output = output.as_ref();
        let config_content = toml::to_string_pretty(&FasTutorConfig::default())
            .context("Failed to serialize default configuration")?;

        fs::write(output, config_content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(())
    }
}

/// Configuration manager for loading configurations
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: FasTutorConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| FasError::Configuration(format!("Cannot read current directory: {e}")))?;
        Self::load_from_workspace(cwd)
    }

    /// Get the user's home directory path
    pub(crate) fn get_home_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home));
        }

        if let Ok(userprofile) = std::env::var("USERPROFILE") {
            return Some(PathBuf::from(userprofile));
        }

        dirs::home_dir()
    }

    /// Load configuration from a specific workspace
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_home(workspace.as_ref(), Self::get_home_dir().as_deref())
    }

    fn load_with_home(workspace: &Path, home_dir: Option<&Path>) -> Result<Self> {
        let mut candidates = vec![
            workspace.join(files::CONFIG_FILE),
            workspace.join(files::CONFIG_DIR).join(files::CONFIG_FILE),
        ];
        if let Some(home_dir) = home_dir {
            candidates.push(home_dir.join(files::CONFIG_DIR).join(files::CONFIG_FILE));
        }

        match candidates.into_iter().find(|path| path.exists()) {
            Some(path) => Self::load_from_file(path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self {
                    config: FasTutorConfig::default(),
                    config_path: None,
                })
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FasError::Configuration(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        let config: FasTutorConfig = toml::from_str(&content).map_err(|e| {
            FasError::Configuration(format!("Failed to parse config file {}: {e}", path.display()))
        })?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &FasTutorConfig {
        &self.config
    }

    /// Take ownership of the loaded configuration
    pub fn into_config(self) -> FasTutorConfig {
        self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_documented_values() {
        let config = FasTutorConfig::default();
        assert_eq!(config.llm.model, "gpt-4");
        assert_eq!(config.llm.temperature, 0.5);
        assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
        assert_eq!(config.llm.max_tokens_limit(), None);
        assert_eq!(config.llm.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.ui.default_language, Language::English);
        assert!(config.ui.render_markdown);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: FasTutorConfig = toml::from_str(
            r#"
            [llm]
            model = "gpt-4o"
            max_tokens = 800

            [ui]
            default_language = "ar"
            "#,
        )
        .unwrap();

        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.max_tokens_limit(), Some(800));
        assert_eq!(config.llm.temperature, 0.5);
        assert_eq!(config.ui.default_language, Language::Arabic);
        assert!(config.ui.render_markdown);
    }

    #[test]
    fn workspace_file_wins_over_dot_directory() {
        let workspace = TempDir::new().unwrap();
        fs::write(
            workspace.path().join(files::CONFIG_FILE),
            "[llm]\nmodel = \"root\"\n",
        )
        .unwrap();
        let dot_dir = workspace.path().join(files::CONFIG_DIR);
        fs::create_dir_all(&dot_dir).unwrap();
        fs::write(dot_dir.join(files::CONFIG_FILE), "[llm]\nmodel = \"dot\"\n").unwrap();

        let manager = ConfigManager::load_with_home(workspace.path(), None).unwrap();
        assert_eq!(manager.config().llm.model, "root");
        assert_eq!(
            manager.config_path(),
            Some(workspace.path().join(files::CONFIG_FILE).as_path())
        );
    }

    #[test]
    fn home_file_is_used_when_workspace_has_none() {
        let workspace = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let home_dir = home.path().join(files::CONFIG_DIR);
        fs::create_dir_all(&home_dir).unwrap();
        fs::write(home_dir.join(files::CONFIG_FILE), "[ui]\nrender_markdown = false\n").unwrap();

        let manager = ConfigManager::load_with_home(workspace.path(), Some(home.path())).unwrap();
        assert!(!manager.config().ui.render_markdown);

        let empty_home = TempDir::new().unwrap();
        let manager =
            ConfigManager::load_with_home(workspace.path(), Some(empty_home.path())).unwrap();
        assert!(manager.config_path().is_none());
        assert_eq!(manager.into_config(), FasTutorConfig::default());
    }

    #[test]
    fn invalid_toml_is_a_configuration_error() {
        let workspace = TempDir::new().unwrap();
        let path = workspace.path().join(files::CONFIG_FILE);
        fs::write(&path, "[llm\nmodel = ").unwrap();
        assert!(matches!(
            ConfigManager::load_from_file(&path),
            Err(FasError::Configuration(_))
        ));
    }

    #[test]
    fn bootstrap_writes_loadable_sample_and_respects_force() {
        let workspace = TempDir::new().unwrap();
        let created = FasTutorConfig::bootstrap_project(workspace.path(), false).unwrap();
        assert_eq!(created, vec![files::CONFIG_FILE.to_string()]);

        let loaded =
            ConfigManager::load_from_file(workspace.path().join(files::CONFIG_FILE)).unwrap();
        assert_eq!(loaded.config(), &FasTutorConfig::default());

        assert!(
            FasTutorConfig::bootstrap_project(workspace.path(), false)
                .unwrap()
                .is_empty()
        );
        assert_eq!(
            FasTutorConfig::bootstrap_project(workspace.path(), true).unwrap().len(),
            1
        );
    }
}
