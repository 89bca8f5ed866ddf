//! YAML configuration file

use std::fs;
use std::path::{Path, PathBuf};

use super::LoggerConfig;
use crate::error::{LoggerError, LoggerResult};

impl LoggerConfig {
    /// User-level config file (~/.config/leveled-logger/config.yaml)
    pub fn user_config_path() -> PathBuf {
        // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("leveled-logger").join("config.yaml")
    }

    /// Load settings from a YAML file. A missing file yields the defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| LoggerError::io(path, e))?;
        Self::from_yaml_str(&content)
    }

    /// Parse settings from YAML text; absent keys keep their defaults
    pub fn from_yaml_str(content: &str) -> LoggerResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Write settings to a YAML file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> LoggerResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| LoggerError::io(parent, e))?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).map_err(|e| LoggerError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig::from_yaml_file(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.level, 4);
    }

    #[test]
    fn test_partial_yaml() {
        let config = LoggerConfig::from_yaml_str("level: 2\n").unwrap();
        assert_eq!(config.level, 2);
        assert_eq!(config.path, LoggerConfig::default_log_path());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            LoggerConfig::from_yaml_str("level: [not, a, number]"),
            Err(LoggerError::Yaml(_))
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = LoggerConfig::new("/var/log/service.log", 5);

        config.save(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("/var/log/service.log"));

        assert_eq!(LoggerConfig::from_yaml_file(&path).unwrap(), config);
    }

    #[test]
    fn test_user_config_path() {
        let path = LoggerConfig::user_config_path();
        assert!(path.ends_with("leveled-logger/config.yaml"));
    }
}
