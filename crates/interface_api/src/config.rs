//! API configuration

use serde::Deserialize;

use core_kernel::{CoreError, Timezone};
use domain_rider::RiderCatalog;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// IANA timezone of the back office; attachment dates are taken in it
    pub timezone: String,
    /// JSON rider catalog; the built-in catalog is used when unset
    pub catalog_path: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            timezone: "UTC".to_string(),
            catalog_path: None,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables,
    /// falling back to defaults for anything unset
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = ApiConfig::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("timezone", defaults.timezone)?
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parses the configured timezone
    pub fn timezone(&self) -> Result<Timezone, CoreError> {
        Ok(self.timezone.parse::<Timezone>()?)
    }

    /// Loads the rider catalog named by `catalog_path`, or the built-in one
    pub fn load_catalog(&self) -> Result<RiderCatalog, CoreError> {
        let catalog = match &self.catalog_path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    CoreError::configuration(format!("cannot read catalog {}: {}", path, e))
                })?;
                RiderCatalog::from_json(&json)
            }
            None => RiderCatalog::standard(),
        };
        catalog.map_err(|e| CoreError::configuration(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.timezone().unwrap(), Timezone::default());
        assert!(config.load_catalog().unwrap().len() > 0);
    }

    #[test]
    fn test_bad_timezone() {
        let config = ApiConfig {
            timezone: "Nowhere/Special".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(config.timezone(), Err(CoreError::Temporal(_))));
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = ApiConfig {
            catalog_path: Some("/nonexistent/catalog.json".to_string()),
            ..ApiConfig::default()
        };
        assert!(matches!(config.load_catalog(), Err(CoreError::Configuration(_))));
    }
}
