use crate::constants::{DEFAULT_BASE_URL, HEALTH_CHECK_INTERVAL_SECS, MAX_MESSAGE_CHARS};
use crate::errors::{ConfabError, ConfabResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub health_check_interval_secs: u64,
    pub max_message_chars: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            health_check_interval_secs: HEALTH_CHECK_INTERVAL_SECS,
            max_message_chars: MAX_MESSAGE_CHARS,
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Loads the config file, creating a default one on first run.
pub fn initialize_config() -> ConfabResult<()> {
    let config_path = get_config_path()?;

    if config_path.exists() {
        let config = load_from(&config_path)?;
        validate_config(&config)?;
        *CONFIG.write().unwrap() = config;
    } else {
        let mut config = Config::default();

        // Env var wins over the built-in default on first run
        if let Ok(url) = env::var("CONFAB_BASE_URL") {
            config.base_url = url;
        }

        save_to(&config_path, &config)?;
        *CONFIG.write().unwrap() = config;
    }

    Ok(())
}

fn load_from(path: &Path) -> ConfabResult<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| ConfabError::config_error(format!("Failed to read config file: {}", e)))?;

    serde_json::from_str(&config_str)
        .map_err(|e| ConfabError::config_error(format!("Failed to parse config: {}", e)))
}

fn save_to(path: &Path, config: &Config) -> ConfabResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ConfabError::config_error(format!("Failed to create config directory: {}", e))
        })?;
    }

    let config_str = serde_json::to_string_pretty(config)
        .map_err(|e| ConfabError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, config_str)
        .map_err(|e| ConfabError::config_error(format!("Failed to write config file: {}", e)))
}

fn get_config_path() -> ConfabResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ConfabError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("confab").join("config.json"))
}

fn validate_config(config: &Config) -> ConfabResult<()> {
    if config.base_url.is_empty() {
        return Err(ConfabError::config_error("base_url is required"));
    }

    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(ConfabError::config_error(
            "base_url must start with http:// or https://",
        ));
    }

    if config.health_check_interval_secs == 0 {
        return Err(ConfabError::config_error(
            "health_check_interval_secs must be greater than 0",
        ));
    }

    if config.max_message_chars == 0 {
        return Err(ConfabError::config_error(
            "max_message_chars must be greater than 0",
        ));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

pub fn update_config(updated_config: Config) -> ConfabResult<()> {
    validate_config(&updated_config)?;

    let config_path = get_config_path()?;
    save_to(&config_path, &updated_config)?;

    *CONFIG.write().unwrap() = updated_config;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_empty_base_url() {
        let mut config = Config::default();
        config.base_url = "".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_non_http_base_url() {
        let mut config = Config::default();
        config.base_url = "ftp://example.com".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_zero_interval() {
        let mut config = Config::default();
        config.health_check_interval_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.base_url = "http://chat.example.com".to_string();
        config.health_check_interval_secs = 10;

        save_to(&path, &config).unwrap();
        let loaded = load_from(&path).unwrap();

        assert_eq!(loaded.base_url, "http://chat.example.com");
        assert_eq!(loaded.health_check_interval_secs, 10);
        assert_eq!(loaded.max_message_chars, MAX_MESSAGE_CHARS);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(load_from(&path).is_err());
    }
}
