use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the cart, order history and guest identity
    pub data_dir: PathBuf,
    /// Base URL of the remote document store
    pub server_url: String,
    /// Optional bearer token for the document store
    pub api_key: Option<String>,
    /// Path of the restaurant configuration/catalog document
    pub restaurant_doc: String,
}

impl Default for Config {
    fn default() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        Self {
            data_dir: PathBuf::from(&home).join(".tavola"),
            server_url: "http://localhost:8080".to_string(),
            api_key: None,
            restaurant_doc: "restaurant/main".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut config = Self::default();

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            config = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;
        }

        // Apply environment variable overrides
        if let Ok(data_dir) = std::env::var("TAVOLA_DATA_DIR") {
            config.data_dir = PathBuf::from(data_dir);
        }
        if let Ok(server_url) = std::env::var("TAVOLA_SERVER_URL") {
            config.server_url = server_url;
        }
        if let Ok(api_key) = std::env::var("TAVOLA_API_KEY") {
            config.api_key = Some(api_key);
        }
        if let Ok(doc) = std::env::var("TAVOLA_RESTAURANT_DOC") {
            config.restaurant_doc = doc;
        }

        Ok(config)
    }

    /// Default config file path: ~/.config/tavola/config.yaml
    pub fn default_config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home)
            .join(".config")
            .join("tavola")
            .join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    e
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.data_dir.to_string_lossy().contains(".tavola"));
        assert_eq!(config.restaurant_doc, "restaurant/main");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_load_no_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.restaurant_doc, "restaurant/main");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "data_dir: /custom/state").unwrap();
        writeln!(file, "server_url: https://store.example/api").unwrap();
        writeln!(file, "restaurant_doc: restaurant/42").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/custom/state"));
        assert_eq!(config.server_url, "https://store.example/api");
        assert_eq!(config.restaurant_doc, "restaurant/42");
    }

    #[test]
    fn test_env_var_overrides_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "server_url: https://fromfile.example").unwrap();

        std::env::set_var("TAVOLA_SERVER_URL", "https://fromenv.example");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.server_url, "https://fromenv.example");

        std::env::remove_var("TAVOLA_SERVER_URL");
    }
}
