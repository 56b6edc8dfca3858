use crate::error::AppError;
use crate::filesystem;
use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/publish";

const CONFIG_FILE: &str = "config.toml";

/// Persisted app settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub server_endpoint: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Loads the config, falling back to defaults when the file is absent or
/// unreadable (first start, fresh install).
pub fn load_config() -> AppConfig {
    let path = filesystem::get_app_data_dir().join(CONFIG_FILE);
    match fs::read_to_string(&path) {
        Ok(raw) => toml::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Invalid config file, using defaults: {}", e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

pub fn save_config(config: &AppConfig) -> Result<(), AppError> {
    let dir = filesystem::get_app_data_dir();
    fs::create_dir_all(&dir)?;

    let raw = toml::to_string_pretty(config).map_err(|e| AppError::Config(e.to_string()))?;
    fs::write(dir.join(CONFIG_FILE), raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(
            AppConfig::default().server_endpoint,
            "http://127.0.0.1:5000/publish"
        );
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = AppConfig {
            server_endpoint: "http://10.0.0.2:5000/publish".to_string(),
        };
        let raw = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }
}
