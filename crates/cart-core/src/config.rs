//! Client Configuration
//!
//! A static WASM bundle has no process environment at runtime, so overrides
//! are read at build time (`CART_API_URL`, `CART_LOG_LEVEL`).

use std::str::FromStr;

use log::LevelFilter;

/// Backend endpoint used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// REST endpoint, without trailing slash
    pub base_url: String,
    /// Console log level
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Configuration baked in by the build environment
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("CART_API_URL"), option_env!("CART_LOG_LEVEL"))
    }

    /// Build from optional raw values; blanks and unparsable levels fall back to defaults
    pub fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url {
            config = config.with_base_url(url);
        }
        if let Some(level) = log_level.and_then(|l| LevelFilter::from_str(l.trim()).ok()) {
            config.log_level = level;
        }
        config
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        let url = url.trim().trim_end_matches('/');
        if !url.is_empty() {
            self.base_url = url.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_values(None, None);
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_values(Some(" https://shop.example/api/ "), Some("debug"));
        assert_eq!(config.base_url, "https://shop.example/api");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_and_invalid_values_keep_defaults() {
        let config = Config::from_values(Some("  "), Some("loud"));
        assert_eq!(config, Config::default());
    }
}
