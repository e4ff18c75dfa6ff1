//! Kiosk configuration loading.
//!
//! The menu, the payment methods shown on the payment screen, the session actor's
//! channel size and the roulette reveal delay all come from one TOML document. A
//! default copy is compiled into the binary; `KIOSK_CONFIG` points at an override.

use crate::model::MenuCatalog;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an override configuration file.
pub const CONFIG_ENV: &str = "KIOSK_CONFIG";

const EMBEDDED_CONFIG: &str = include_str!("../config/kiosk.toml");

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse kiosk config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid kiosk config: {0}")]
    Invalid(String),
}

/// The whole configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct KioskConfig {
    #[serde(default)]
    pub session: SessionSettings,
    pub payment_methods: Vec<String>,
    #[serde(default)]
    pub roulette: RouletteSettings,
    pub categories: Vec<CategoryConfig>,
}

/// Session actor settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// Capacity of the actor's request channel.
    pub buffer_size: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouletteSettings {
    /// Cosmetic pause before a pick is revealed.
    pub reveal_delay_ms: u64,
}

impl Default for RouletteSettings {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 1500,
        }
    }
}

impl RouletteSettings {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

/// One menu category as written in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub items: Vec<ItemConfig>,
}

/// One menu item as written in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemConfig {
    pub name: String,
    /// Whole won.
    pub price: u64,
    #[serde(default)]
    pub description: String,
}

impl KioskConfig {
    /// The configuration bundled with the crate.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: KioskConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    /// - the file cannot be read
    /// - the TOML is malformed or misses required fields
    /// - validation fails (see [`KioskConfig::validate`])
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Uses the file named by `KIOSK_CONFIG` when set, the embedded config otherwise.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Self::embedded(),
        }
    }

    /// Checks the settings and the catalog.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.buffer_size == 0 {
            return Err(ConfigError::Invalid(
                "session.buffer_size must be greater than zero".to_string(),
            ));
        }
        if self.payment_methods.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one payment method is required".to_string(),
            ));
        }
        if self.payment_methods.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "payment method labels must not be blank".to_string(),
            ));
        }
        self.catalog().map(|_| ())
    }

    /// Builds the menu catalog described by this configuration.
    pub fn catalog(&self) -> Result<MenuCatalog, ConfigError> {
        MenuCatalog::from_config(&self.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = KioskConfig::embedded().unwrap();
        assert_eq!(config.session.buffer_size, 32);
        assert_eq!(config.payment_methods.len(), 3);
        assert_eq!(config.roulette.reveal_delay(), Duration::from_millis(1500));

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.categories().len(), 4);
        assert_eq!(catalog.item_count(), 12);
    }

    #[test]
    fn test_defaults_apply_when_sections_missing() {
        let toml_str = r#"
            payment_methods = ["card"]

            [[categories]]
            name = "drinks"

            [[categories.items]]
            name = "cola"
            price = 1800
        "#;

        let config = KioskConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.session.buffer_size, 32);
        assert_eq!(config.roulette.reveal_delay_ms, 1500);
        assert_eq!(config.categories[0].items[0].description, "");
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let no_methods = r#"
            payment_methods = []

            [[categories]]
            name = "drinks"
            [[categories.items]]
            name = "cola"
            price = 1800
        "#;
        assert!(matches!(
            KioskConfig::from_toml_str(no_methods),
            Err(ConfigError::Invalid(_))
        ));

        let zero_buffer = r#"
            payment_methods = ["card"]
            [session]
            buffer_size = 0
            [[categories]]
            name = "drinks"
            [[categories.items]]
            name = "cola"
            price = 1800
        "#;
        assert!(matches!(
            KioskConfig::from_toml_str(zero_buffer),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_parse_and_read_errors() {
        assert!(matches!(
            KioskConfig::from_toml_str("payment_methods = "),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            KioskConfig::load("/definitely/not/here/kiosk.toml"),
            Err(ConfigError::Read { .. })
        ));
    }

    // The only test that touches KIOSK_CONFIG
    #[test]
    fn test_from_env_prefers_named_file() {
        std::env::remove_var(CONFIG_ENV);
        assert_eq!(KioskConfig::from_env().unwrap().session.buffer_size, 32);

        let path = std::env::temp_dir().join(format!("kiosk-env-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
                payment_methods = ["현금"]

                [session]
                buffer_size = 2

                [[categories]]
                name = "음료"

                [[categories.items]]
                name = "식혜"
                price = 2200
            "#,
        )
        .unwrap();
        std::env::set_var(CONFIG_ENV, &path);
        let config = KioskConfig::from_env().unwrap();
        assert_eq!(config.session.buffer_size, 2);
        assert_eq!(config.payment_methods, vec!["현금".to_string()]);

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(KioskConfig::from_env(), Err(ConfigError::Read { .. })));
        std::env::remove_var(CONFIG_ENV);
    }
}
