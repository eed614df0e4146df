use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use xdg::BaseDirectories;

use crate::formatting::BoxChars;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { use_unicode: true }
    }
}

impl DisplayConfig {
    pub fn box_chars(&self) -> BoxChars {
        BoxChars::from_use_unicode(self.use_unicode)
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|_| Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, "/dev/null");
        assert!(config.display.use_unicode);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
log_level = "debug"
log_file = "/tmp/nhl-dash.log"

[display]
use_unicode = false
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, "/tmp/nhl-dash.log");
        assert!(!config.display.use_unicode);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str(r#"log_level = "trace""#).unwrap();
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.log_file, "/dev/null");
        assert!(config.display.use_unicode);
    }

    #[test]
    fn test_display_config_box_chars() {
        let unicode = DisplayConfig { use_unicode: true };
        assert_eq!(unicode.box_chars().horizontal, "─");

        let ascii = DisplayConfig { use_unicode: false };
        assert_eq!(ascii.box_chars().horizontal, "-");
    }
}
