use crate::error::{Result, StorylinkError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".storylink.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorylinkConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub client: ClientSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8081
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Base URL of the storylink API, including the `/api` prefix.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    crate::api_client::DEFAULT_API_URL.to_string()
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl StorylinkConfig {
    /// Load configuration from an explicit path, or search upward from
    /// `start_path` for `.storylink.toml`. Falls back to defaults when no
    /// file exists anywhere up the tree.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => match Self::find_config_file(start_path) {
                Some(path) => Self::load_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StorylinkError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let config: StorylinkConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return user_config_file().filter(|p| p.exists());
            }
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Per-user config location, e.g. `~/.config/storylink/config.toml`.
pub fn user_config_file() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "storylink")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = StorylinkConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.client.api_url, "http://localhost:8081/api");
        assert!(config.logging.file.is_none());
        assert_eq!(config.listen_addr(), "127.0.0.1:8081");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[server]\nport = 9090\n").unwrap();

        let config = StorylinkConfig::load(Some(&path), temp_dir.path()).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.client.api_url, "http://localhost:8081/api");
    }

    #[test]
    fn test_finds_config_in_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[client]\napi_url = \"http://qa-box:8081/api\"\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = StorylinkConfig::load(None, &nested).unwrap();
        assert_eq!(config.client.api_url, "http://qa-box:8081/api");
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let err = StorylinkConfig::load(Some(&missing), temp_dir.path()).unwrap_err();
        assert!(matches!(err, StorylinkError::Config(_)));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[server\nport = ").unwrap();
        assert!(StorylinkConfig::load_file(&path).is_err());
    }
}
