use crate::core::error::ChatError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_endpoint() -> String {
    "http://127.0.0.1:3000/api/chat".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// How the fallback branch picks one of its canned paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Uniform, unseeded random choice.
    #[default]
    Random,
    /// Choice derived from a hash of the input, stable for equal inputs.
    Hashed,
}

impl FallbackMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "random" => Some(FallbackMode::Random),
            "hashed" => Some(FallbackMode::Hashed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Allowed CORS origins; any origin is accepted when empty.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub fallback: FallbackMode,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            client: ClientConfig::default(),
            fallback: FallbackMode::default(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    fn config_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join(".agentchat").join("config.yaml")
    }

    /// Loads the user config, writing a default file on first run.
    pub fn load() -> Result<Config, ChatError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Config, ChatError> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            if contents.trim().is_empty() {
                return Ok(Config::default());
            }
            return serde_yml::from_str::<Config>(&contents)
                .map_err(|e| ChatError::Config(format!("Parse {}: {}", path.display(), e)));
        }

        let config = Config::default();
        if let Err(e) = config.save_to(path) {
            tracing::warn!(path = %path.display(), error = %e, "could not write default config");
        }
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ChatError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let yaml_content = serde_yml::to_string(self)?;
        fs::write(path, yaml_content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = Config::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.server.bind_address, "127.0.0.1:3000");
        assert_eq!(config.client.endpoint, "http://127.0.0.1:3000/api/chat");
        assert_eq!(config.fallback, FallbackMode::Random);
    }

    #[test]
    fn unwritable_default_still_loads() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let config = Config::load_from(&blocker.join("config.yaml")).unwrap();

        assert_eq!(config.server.bind_address, "127.0.0.1:3000");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "fallback: hashed\nserver:\n  bind_address: 0.0.0.0:8080\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.fallback, FallbackMode::Hashed);
        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
        assert!(config.server.cors_allowed_origins.is_empty());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn invalid_yaml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "fallback: [not, a, mode]\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut config = Config::default();
        config.server.cors_allowed_origins = vec!["http://localhost:5173".to_string()];
        config.log_json = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.server.cors_allowed_origins, config.server.cors_allowed_origins);
        assert!(loaded.log_json);
    }

    #[test]
    fn fallback_mode_parses_case_insensitively() {
        assert_eq!(FallbackMode::from_str("HASHED"), Some(FallbackMode::Hashed));
        assert_eq!(FallbackMode::from_str("random"), Some(FallbackMode::Random));
        assert_eq!(FallbackMode::from_str("seeded"), None);
    }
}
