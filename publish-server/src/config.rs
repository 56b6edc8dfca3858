use std::collections::HashMap;
use std::fs;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug)]
pub struct Settings {
    pub bind_addr: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

/// Defaults, overridden by `server.toml`, overridden by environment.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        apply_file_config(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("BLOGPORT_BIND") {
        settings.bind_addr = v;
    }

    settings
}

fn apply_file_config(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("bind_addr") {
            settings.bind_addr = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_addr() {
        assert_eq!(Settings::default().bind_addr, "127.0.0.1:5000");
    }

    #[test]
    fn test_file_config_overrides_bind_addr() {
        let mut settings = Settings::default();
        apply_file_config(&mut settings, "bind_addr = \"0.0.0.0:8080\"\n");
        assert_eq!(settings.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_unparseable_file_config_keeps_defaults() {
        let mut settings = Settings::default();
        apply_file_config(&mut settings, "not toml at all [");
        assert_eq!(settings.bind_addr, "127.0.0.1:5000");
    }
}
