//! API key retrieval from the environment, `.env` files, secrets files and
//! the configuration file.
//!
//! Lookup order, first non-empty value wins:
//! 1. the configured environment variable (`OPENAI_API_KEY` by default),
//!    which includes values loaded from a `.env` file
//! 2. `openai_api_key` in `.fastutor/secrets.toml` inside the workspace
//! 3. `openai_api_key` in `~/.fastutor/secrets.toml`
//! 4. `llm.api_key` from `fastutor.toml`
//!
//! Finding nothing is a configuration error; callers treat it as fatal.

use super::constants::{env_vars, files};
use super::loader::ConfigManager;
use crate::error::{FasError, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where to look for the OpenAI API key
#[derive(Debug, Clone)]
pub struct ApiKeySources {
    /// Environment variable holding the key
    pub env_var: String,
    /// Workspace whose `.fastutor/secrets.toml` is consulted
    pub workspace: Option<PathBuf>,
    /// Home directory whose `.fastutor/secrets.toml` is consulted
    pub home_dir: Option<PathBuf>,
    /// `llm.api_key` from the configuration file
    pub config_value: Option<String>,
}

impl Default for ApiKeySources {
    fn default() -> Self {
        Self {
            env_var: env_vars::OPENAI_API_KEY.to_string(),
            workspace: None,
            home_dir: ConfigManager::get_home_dir(),
            config_value: None,
        }
    }
}

impl ApiKeySources {
    pub fn for_workspace(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: Some(workspace.into()),
            ..Default::default()
        }
    }

    pub fn with_env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = env_var.into();
        self
    }

    pub fn with_config_value(mut self, value: Option<String>) -> Self {
        self.config_value = value;
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct SecretsFile {
    #[serde(default)]
    openai_api_key: Option<String>,
}

/// Load environment variables from a `.env` file in the current directory.
///
/// A missing file is fine; a malformed one is logged and skipped.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded environment variables"),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("failed to load .env file: {e}"),
    }
}

/// Resolve the API key, failing when no source provides one
pub fn get_api_key(sources: &ApiKeySources) -> Result<String> {
    if let Some(key) = non_empty(env::var(&sources.env_var).ok()) {
        debug!(source = %sources.env_var, "using API key from environment");
        return Ok(key);
    }

    let secrets_dirs = [sources.workspace.as_deref(), sources.home_dir.as_deref()];
    for dir in secrets_dirs.into_iter().flatten() {
        let path = dir.join(files::CONFIG_DIR).join(files::SECRETS_FILE);
        if let Some(key) = read_secrets_file(&path)? {
            debug!(source = %path.display(), "using API key from secrets file");
            return Ok(key);
        }
    }

    if let Some(key) = non_empty(sources.config_value.clone()) {
        debug!("using API key from configuration file");
        return Ok(key);
    }

    Err(FasError::Configuration(format!(
        "No OpenAI API key found. Set the {} environment variable (or add it to .env), \
         add openai_api_key to {}/{}, or set llm.api_key in {}",
        sources.env_var,
        files::CONFIG_DIR,
        files::SECRETS_FILE,
        files::CONFIG_FILE
    )))
}

fn read_secrets_file(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|e| {
        FasError::Configuration(format!("Failed to read {}: {e}", path.display()))
    })?;
    let secrets: SecretsFile = toml::from_str(&content).map_err(|e| {
        FasError::Configuration(format!("Failed to parse {}: {e}", path.display()))
    })?;
    Ok(non_empty(secrets.openai_api_key))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn isolated(env_var: &str) -> ApiKeySources {
        ApiKeySources {
            env_var: env_var.to_string(),
            workspace: None,
            home_dir: None,
            config_value: None,
        }
    }

    fn write_secrets(dir: &Path, key: &str) {
        let secrets_dir = dir.join(files::CONFIG_DIR);
        fs::create_dir_all(&secrets_dir).unwrap();
        fs::write(
            secrets_dir.join(files::SECRETS_FILE),
            format!("openai_api_key = \"{key}\"\n"),
        )
        .unwrap();
    }

    #[test]
    fn environment_takes_priority() {
        let workspace = TempDir::new().unwrap();
        write_secrets(workspace.path(), "from-secrets");
        unsafe {
            env::set_var("FASTUTOR_TEST_KEY_PRIORITY", "from-env");
        }

        let sources = ApiKeySources {
            workspace: Some(workspace.path().to_path_buf()),
            config_value: Some("from-config".to_string()),
            ..isolated("FASTUTOR_TEST_KEY_PRIORITY")
        };
        assert_eq!(get_api_key(&sources).unwrap(), "from-env");

        unsafe {
            env::remove_var("FASTUTOR_TEST_KEY_PRIORITY");
        }
    }

    #[test]
    fn workspace_secrets_before_home_secrets() {
        let workspace = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        write_secrets(workspace.path(), "workspace-key");
        write_secrets(home.path(), "home-key");

        let sources = ApiKeySources {
            workspace: Some(workspace.path().to_path_buf()),
            home_dir: Some(home.path().to_path_buf()),
            ..isolated("FASTUTOR_TEST_KEY_UNSET_1")
        };
        assert_eq!(get_api_key(&sources).unwrap(), "workspace-key");

        let home_only = ApiKeySources {
            home_dir: Some(home.path().to_path_buf()),
            ..isolated("FASTUTOR_TEST_KEY_UNSET_1")
        };
        assert_eq!(get_api_key(&home_only).unwrap(), "home-key");
    }

    #[test]
    fn config_value_is_last_resort() {
        let sources =
            isolated("FASTUTOR_TEST_KEY_UNSET_2").with_config_value(Some("from-config".into()));
        assert_eq!(get_api_key(&sources).unwrap(), "from-config");
    }

    #[test]
    fn blank_values_are_ignored_and_absence_fails() {
        unsafe {
            env::set_var("FASTUTOR_TEST_KEY_BLANK", "   ");
        }
        let sources = isolated("FASTUTOR_TEST_KEY_BLANK").with_config_value(Some(String::new()));

        let err = get_api_key(&sources).unwrap_err();
        assert!(matches!(
            err,
            FasError::Configuration(ref msg) if msg.contains("FASTUTOR_TEST_KEY_BLANK")
        ));

        unsafe {
            env::remove_var("FASTUTOR_TEST_KEY_BLANK");
        }
    }

    #[test]
    fn malformed_secrets_file_is_a_configuration_error() {
        let workspace = TempDir::new().unwrap();
        let secrets_dir = workspace.path().join(files::CONFIG_DIR);
        fs::create_dir_all(&secrets_dir).unwrap();
        fs::write(secrets_dir.join(files::SECRETS_FILE), "openai_api_key = ").unwrap();

        let sources = ApiKeySources {
            workspace: Some(workspace.path().to_path_buf()),
            ..isolated("FASTUTOR_TEST_KEY_UNSET_3")
        };
        assert!(matches!(
            get_api_key(&sources),
            Err(FasError::Configuration(_))
        ));
    }
}
