use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Port to listen on
    pub port: u16,
    /// Path to the JSON data file
    pub data_path: PathBuf,
    /// How long an admin session stays valid, in hours
    pub session_hours: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            data_path: PathBuf::from("data.json"),
            session_hours: 24,
        }
    }
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut config = Self::default();

        // Try to load from config file
        let path = config_path
            .or_else(|| std::env::var("PORTFOLIO_CONFIG").ok().map(PathBuf::from))
            .unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            config = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;
        }

        // Apply environment variable overrides
        if let Ok(port) = std::env::var("PORTFOLIO_PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORTFOLIO_PORT", port))?;
        }
        if let Ok(data_path) = std::env::var("PORTFOLIO_DATA_PATH") {
            config.data_path = PathBuf::from(data_path);
        }
        if let Ok(hours) = std::env::var("PORTFOLIO_SESSION_HOURS") {
            config.session_hours = hours
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORTFOLIO_SESSION_HOURS", hours))?;
        }

        Ok(config)
    }

    /// Default config file path: ~/.config/portfolio/config.yaml
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio")
            .join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidValue(&'static str, String),
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
            ConfigError::InvalidValue(var, value) => {
                write!(f, "Invalid value for {}: '{}'", var, value)
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
        assert_eq!(config.port, 3000);
        assert_eq!(config.data_path, PathBuf::from("data.json"));
        assert_eq!(config.session_hours, 24);
    }

    #[test]
    fn test_load_no_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.session_hours, 24);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "data_path: /srv/site/data.json").unwrap();
        writeln!(file, "session_hours: 2").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.data_path, PathBuf::from("/srv/site/data.json"));
        assert_eq!(config.session_hours, 2);
    }

    #[test]
    fn test_env_var_overrides_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "port: 4000").unwrap();

        // Set env var
        std::env::set_var("PORTFOLIO_PORT", "5050");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.port, 5050);

        // Clean up
        std::env::remove_var("PORTFOLIO_PORT");
    }

    #[test]
    fn test_invalid_yaml_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "invalid: yaml: content: [").unwrap();

        let result = Config::load(Some(config_path));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
