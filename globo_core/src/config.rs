//! Configuration file support for Globo.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/globo/config.toml`.
//! Everything has a default; CLI flags override config values.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub program: ProgramConfig,

    #[serde(default)]
    pub email: EmailConfig,

    #[serde(default)]
    pub todoist: TodoistConfig,
}

/// Active weekly program configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProgramConfig {
    #[serde(default = "default_program")]
    pub default: String,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            default: default_program(),
        }
    }
}

/// Email transport configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_relay")]
    pub smtp_relay: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_relay: default_smtp_relay(),
        }
    }
}

/// Todoist delivery configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TodoistConfig {
    #[serde(default = "default_todoist_api_url")]
    pub api_url: String,

    /// Falls back to the TODOIST_API_TOKEN environment variable when unset.
    #[serde(default)]
    pub api_token: Option<String>,
}

impl Default for TodoistConfig {
    fn default() -> Self {
        Self {
            api_url: default_todoist_api_url(),
            api_token: None,
        }
    }
}

// Default value functions
fn default_program() -> String {
    "dumbbell_stopgap".into()
}

fn default_smtp_relay() -> String {
    crate::delivery::DEFAULT_SMTP_RELAY.into()
}

fn default_todoist_api_url() -> String {
    crate::delivery::DEFAULT_TODOIST_API_URL.into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("globo").join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.program.default, "dumbbell_stopgap");
        assert_eq!(config.email.smtp_relay, "smtp.gmail.com");
        assert!(config.todoist.api_token.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.program.default, parsed.program.default);
        assert_eq!(config.todoist.api_url, parsed.todoist.api_url);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[program]
default = "ws4sb"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.program.default, "ws4sb");
        assert_eq!(config.email.smtp_relay, "smtp.gmail.com"); // default
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[todoist]\napi_token = \"abc123\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.todoist.api_token.as_deref(), Some("abc123"));
    }
}
