// src/core/config.rs
use std::collections::BTreeSet;
use std::env;
use std::path::PathBuf;
use log::LevelFilter;
use thiserror::Error;

use crate::models::{clamp_length, CharacterCategory, DEFAULT_PASSWORD_LENGTH};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid character types: {0}")]
    InvalidCharacterTypes(String),
}

// Configuration for the generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_categories: BTreeSet<CharacterCategory>,

    // Web Interface
    pub web_enabled: bool,
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: DEFAULT_PASSWORD_LENGTH,
            default_categories: CharacterCategory::ALL.into_iter().collect(),

            // Web Interface
            web_enabled: false,
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, starting from the defaults.
    ///
    /// Values that fail to parse leave the default in place.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.trim().parse::<i64>() {
                config.default_password_length = clamp_length(length);
            }
        }

        if let Some(val) = lookup("DEFAULT_CHARACTER_TYPES") {
            match parse_categories(&val) {
                Ok(categories) => config.default_categories = categories,
                Err(e) => log::warn!("{}, using all character types", e),
            }
        }

        // Web Interface
        if let Some(val) = lookup("WEB_ENABLED") {
            if let Ok(enabled) = val.trim().parse() {
                config.web_enabled = enabled;
            }
        }

        if let Some(val) = lookup("WEB_PORT") {
            if let Ok(port) = val.trim().parse() {
                config.web_port = port;
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }
}

/// Parse a comma separated list such as `uppercase,numbers`.
///
/// Unknown names are rejected together; an empty list yields an empty set,
/// which generation later treats as uppercase only.
pub fn parse_categories(value: &str) -> Result<BTreeSet<CharacterCategory>, ConfigError> {
    let mut categories = BTreeSet::new();
    let mut unknown = Vec::new();

    for name in value.split(',').filter(|s| !s.trim().is_empty()) {
        match name.parse::<CharacterCategory>() {
            Ok(category) => {
                categories.insert(category);
            }
            Err(_) => unknown.push(name.trim().to_string()),
        }
    }

    if unknown.is_empty() {
        Ok(categories)
    } else {
        Err(ConfigError::InvalidCharacterTypes(unknown.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.default_password_length, 20);
        assert_eq!(config.default_categories.len(), 4);
        assert!(!config.web_enabled);
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "32"),
            ("DEFAULT_CHARACTER_TYPES", "lowercase, numbers"),
            ("WEB_ENABLED", "true"),
            ("WEB_PORT", "8088"),
            ("WEB_ADDRESS", "0.0.0.0"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "/tmp/securegen.log"),
        ]);
        assert_eq!(config.default_password_length, 32);
        assert_eq!(
            config.default_categories.into_iter().collect::<Vec<_>>(),
            vec![CharacterCategory::Lowercase, CharacterCategory::Numbers]
        );
        assert!(config.web_enabled);
        assert_eq!(config.web_port, 8088);
        assert_eq!(config.web_address, "0.0.0.0");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/securegen.log")));
    }

    #[test]
    fn length_is_clamped_and_garbage_ignored() {
        assert_eq!(config_from(&[("DEFAULT_PASSWORD_LENGTH", "1000")]).default_password_length, 128);
        assert_eq!(config_from(&[("DEFAULT_PASSWORD_LENGTH", "2")]).default_password_length, 4);
        assert_eq!(config_from(&[("DEFAULT_PASSWORD_LENGTH", "lots")]).default_password_length, 20);
        assert_eq!(config_from(&[("WEB_PORT", "99999")]).web_port, 5000);
    }

    #[test]
    fn unknown_character_type_keeps_defaults() {
        let config = config_from(&[("DEFAULT_CHARACTER_TYPES", "uppercase,emoji")]);
        assert_eq!(config.default_categories.len(), 4);
        assert_eq!(
            parse_categories("uppercase,emoji,kanji"),
            Err(ConfigError::InvalidCharacterTypes("emoji, kanji".to_string()))
        );
    }
}
