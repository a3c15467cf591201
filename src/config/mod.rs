pub mod validation;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

pub use validation::ConfigValidator;

fn default_lrclib_instance() -> String {
    "https://lrclib.net".to_string()
}

fn default_request_timeout_seconds() -> u64 {
    15
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// LRCLIB instance URL
    #[serde(default = "default_lrclib_instance")]
    pub lrclib_instance: String,

    /// Client-side timeout for a lookup request (seconds)
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    /// User-Agent override (optional)
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lrclib_instance: default_lrclib_instance(),
            request_timeout_seconds: default_request_timeout_seconds(),
            user_agent: None,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        // Try to load .env file if it exists (for Docker and development)
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        // An explicitly supplied path must exist; the default path is
        // created with defaults on first run.
        let (config_file, explicit) = match config_path {
            Some(path) => (PathBuf::from(path), true),
            None => (Self::default_config_path()?, false),
        };

        if config_file.exists() {
            let content = fs::read_to_string(&config_file)?;
            config = toml::from_str(&content)?;
        } else if explicit {
            return Err(ConfigError::FileNotFound { path: config_file });
        }

        // Environment variables win over the file
        config.load_from_env();

        ConfigValidator::validate(&config)?;

        // Save config file if it doesn't exist
        if !config_file.exists() {
            if let Some(parent) = config_file.parent() {
                fs::create_dir_all(parent)?;
            }
            config.save(&config_file)?;
        }

        Ok(config)
    }

    fn load_from_env(&mut self) {
        if let Ok(instance) = env::var("LRCFETCH_LRCLIB_INSTANCE") {
            self.lrclib_instance = instance;
        }

        if let Ok(timeout) = env::var("LRCFETCH_REQUEST_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse::<u64>() {
                self.request_timeout_seconds = value;
            }
        }

        if let Ok(agent) = env::var("LRCFETCH_USER_AGENT") {
            self.user_agent = Some(agent);
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let project_dirs =
            ProjectDirs::from("net", "lrclib", "lrcfetch").ok_or(ConfigError::ConfigDirUnavailable)?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// LRCFETCH_* variables currently set, for `config show`.
    pub fn env_overrides() -> Vec<(String, String)> {
        env::vars()
            .filter(|(key, _)| key.starts_with("LRCFETCH_"))
            .collect()
    }

    pub fn create_client(&self) -> crate::core::lrclib::LrclibClient {
        crate::core::lrclib::LrclibClient::new(
            &self.lrclib_instance,
            self.request_timeout(),
            self.user_agent.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_public_instance() {
        let config = Config::default();
        assert_eq!(config.lrclib_instance, "https://lrclib.net");
        assert_eq!(config.request_timeout_seconds, 15);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn toml_round_trip() {
        let config = Config {
            lrclib_instance: "https://lrclib.example.org".to_string(),
            request_timeout_seconds: 30,
            user_agent: Some("custom/1.0".to_string()),
        };
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.lrclib_instance, config.lrclib_instance);
        assert_eq!(parsed.request_timeout_seconds, 30);
        assert_eq!(parsed.user_agent.as_deref(), Some("custom/1.0"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.lrclib_instance, "https://lrclib.net");
        assert_eq!(parsed.request_timeout_seconds, 15);
    }

    #[test]
    fn request_timeout_is_seconds() {
        let config = Config::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }

    // All LRCFETCH_* manipulation lives in this one test: parallel test
    // threads share the process environment.
    #[test]
    fn env_overrides_win_over_file_values() {
        let mut config: Config = toml::from_str(
            "lrclib_instance = \"https://file.example.org\"\nrequest_timeout_seconds = 20\n",
        )
        .unwrap();
        assert_eq!(config.lrclib_instance, "https://file.example.org");

        env::set_var("LRCFETCH_LRCLIB_INSTANCE", "https://env.example.org");
        env::set_var("LRCFETCH_REQUEST_TIMEOUT_SECONDS", "45");
        env::set_var("LRCFETCH_USER_AGENT", "env-agent/1.0");
        config.load_from_env();
        env::remove_var("LRCFETCH_LRCLIB_INSTANCE");
        env::remove_var("LRCFETCH_REQUEST_TIMEOUT_SECONDS");
        env::remove_var("LRCFETCH_USER_AGENT");

        assert_eq!(config.lrclib_instance, "https://env.example.org");
        assert_eq!(config.request_timeout_seconds, 45);
        assert_eq!(config.user_agent.as_deref(), Some("env-agent/1.0"));

        // Unparseable numeric override leaves the current value alone.
        env::set_var("LRCFETCH_REQUEST_TIMEOUT_SECONDS", "not-a-number");
        config.load_from_env();
        env::remove_var("LRCFETCH_REQUEST_TIMEOUT_SECONDS");
        assert_eq!(config.request_timeout_seconds, 45);
    }

    #[test]
    fn load_with_missing_explicit_path_errors() {
        let missing = env::temp_dir().join("lrcfetch-test-no-such-config.toml");
        assert!(!missing.exists());

        let err = Config::load(missing.to_str()).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }
}
