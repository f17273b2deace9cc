//! Configuration management for Gallery

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, GalleryError, Result};
use crate::format::PriceFormat;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storefront: StorefrontConfig,
    pub locale: LocaleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Simulated latency before the catalog arrives
    pub bootstrap_delay_ms: u64,

    /// Card descriptions are cut to this many characters
    pub description_max_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub currency_symbol: String,
    pub thousands_separator: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            bootstrap_delay_ms: 500,
            description_max_chars: 40,
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "¥".to_string(),
            thousands_separator: ",".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Reject values the storefront cannot render with
    pub fn validate(&self) -> Result<()> {
        if self.storefront.description_max_chars == 0 {
            return Err(GalleryError::InvalidInput(
                "storefront.description_max_chars must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Price formatting derived from the locale section
    pub fn price_format(&self) -> PriceFormat {
        PriceFormat {
            currency_symbol: self.locale.currency_symbol.clone(),
            thousands_separator: self.locale.thousands_separator.clone(),
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("GALLERY_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("gallery").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("gallery"))
}
