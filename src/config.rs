//! Configuration model for mimic.
//!
//! The config file is optional YAML. Unknown fields are ignored for forward
//! compatibility and every field has a default, so an empty file and a
//! missing file behave identically. The file is read, never written.

use crate::classify;
use crate::error::{MimicError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "MIMIC_CONFIG";

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mimic.yaml";

fn default_agent_name() -> String {
    "mimic".to_string()
}

fn default_clarify_message() -> String {
    "Please provide a specific question or task so it can be routed to the \
     right response strategy."
        .to_string()
}

/// Configuration for the agent.
///
/// Represents the contents of `mimic.yaml`. Unknown fields in the YAML are
/// ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Agent name reported in JSON output.
    pub agent_name: String,

    /// Response returned for empty prompts.
    pub clarify_message: String,

    /// Extra classifier keywords per knowledge domain.
    ///
    /// Keys must name known domains (see `classify::known_domains`).
    pub extra_keywords: BTreeMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent_name: default_agent_name(),
            clarify_message: default_clarify_message(),
            extra_keywords: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MimicError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| MimicError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            MimicError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Rules:
    /// - `agent_name` must be non-empty
    /// - `clarify_message` must be non-empty (it is itself a response)
    /// - `extra_keywords` keys must name known domains, entries non-empty
    pub fn validate(&self) -> Result<()> {
        if self.agent_name.trim().is_empty() {
            return Err(MimicError::ConfigError(
                "agent_name must not be empty".to_string(),
            ));
        }

        if self.clarify_message.trim().is_empty() {
            return Err(MimicError::ConfigError(
                "clarify_message must not be empty".to_string(),
            ));
        }

        for (domain, keywords) in &self.extra_keywords {
            if !classify::known_domains().any(|known| known == domain) {
                let known: Vec<&str> = classify::known_domains().collect();
                return Err(MimicError::ConfigError(format!(
                    "unknown domain '{}' in extra_keywords; known domains: {}",
                    domain,
                    known.join(", ")
                )));
            }
            if keywords.iter().any(|keyword| keyword.trim().is_empty()) {
                return Err(MimicError::ConfigError(format!(
                    "extra_keywords for domain '{}' contain an empty entry",
                    domain
                )));
            }
        }

        Ok(())
    }

    /// Resolve and load the active config for the CLI.
    ///
    /// Resolution order: explicit `--config` flag, then `MIMIC_CONFIG`, then
    /// `mimic.yaml` in the working directory if present, else defaults.
    /// A path given explicitly must exist; the working-directory lookup is
    /// silent when the file is absent.
    pub fn resolve(flag: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var(CONFIG_ENV_VAR).ok();
        Self::resolve_from(flag, env_path.as_deref(), Path::new("."))
    }

    /// Resolution logic, separated from the process environment for testing.
    fn resolve_from(flag: Option<&Path>, env_path: Option<&str>, cwd: &Path) -> Result<Self> {
        if let Some(path) = flag {
            return Self::load(path);
        }

        if let Some(path) = env_path {
            if !path.trim().is_empty() {
                return Self::load(Path::new(path));
            }
        }

        let default_path: PathBuf = cwd.join(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::load(&default_path);
        }

        Ok(Self::default())
    }
}
