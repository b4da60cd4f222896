//! Credential resolution for the NLU service.
//!
//! The key is looked up in a TOML secrets file first, then in the process
//! environment. Blank values count as missing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const DEFAULT_SECRETS_PATH: &str = ".streamlit/secrets.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no OPENAI_API_KEY in {} or the environment", .0.display())]
    CredentialMissing(PathBuf),
    #[error("failed to read secrets file {}: {source}", path.display())]
    SecretsRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed secrets file {}: {source}", path.display())]
    SecretsParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings for talking to the NLU service
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

/// Where a credential was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    SecretsFile,
    Environment,
}

/// Resolve the API key from `secrets_path`, then from `env_value`.
///
/// A missing secrets file is not an error; an unreadable or malformed one is.
pub fn resolve_api_key(
    secrets_path: &Path,
    env_value: Option<String>,
) -> Result<(String, CredentialSource), ConfigError> {
    let secrets = load_secrets(secrets_path)?;

    if let Some(key) = non_blank(secrets.get(API_KEY_VAR).cloned()) {
        debug!("Using credential from {}", secrets_path.display());
        return Ok((key, CredentialSource::SecretsFile));
    }
    if let Some(key) = non_blank(env_value) {
        debug!("Using credential from ${}", API_KEY_VAR);
        return Ok((key, CredentialSource::Environment));
    }
    Err(ConfigError::CredentialMissing(secrets_path.to_path_buf()))
}

impl Config {
    /// Build from the secrets file and the live environment
    pub fn load(secrets_path: &Path, model: String, api_base: String) -> Result<Self, ConfigError> {
        let (api_key, _) = resolve_api_key(secrets_path, std::env::var(API_KEY_VAR).ok())?;
        Ok(Self {
            api_key,
            model,
            api_base,
        })
    }
}

fn load_secrets(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::SecretsRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table: toml::Table = toml::from_str(&content).map_err(|source| ConfigError::SecretsParse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(table
        .into_iter()
        .filter_map(|(key, value)| match value {
            toml::Value::String(s) => Some((key, s)),
            _ => None,
        })
        .collect())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_file_takes_priority() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "OPENAI_API_KEY = \"sk-from-file\"\n").unwrap();

        let (key, source) = resolve_api_key(&path, Some("sk-from-env".into())).unwrap();
        assert_eq!(key, "sk-from-file");
        assert_eq!(source, CredentialSource::SecretsFile);
    }

    #[test]
    fn environment_is_the_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let (key, source) = resolve_api_key(&path, Some("sk-from-env".into())).unwrap();
        assert_eq!(key, "sk-from-env");
        assert_eq!(source, CredentialSource::Environment);
    }

    #[test]
    fn blank_values_count_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "OPENAI_API_KEY = \"  \"\nOTHER = 1\n").unwrap();

        let err = resolve_api_key(&path, Some(String::new())).unwrap_err();
        assert!(matches!(err, ConfigError::CredentialMissing(_)));
    }

    #[test]
    fn malformed_secrets_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "OPENAI_API_KEY = ").unwrap();

        let err = resolve_api_key(&path, Some("sk-from-env".into())).unwrap_err();
        assert!(matches!(err, ConfigError::SecretsParse { .. }));
    }
}
