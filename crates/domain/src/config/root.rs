use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::recursion::RecursionConfig;
use super::server::ServerConfig;
use super::zone::ZoneConfig;

/// Main configuration structure for Ironzone
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Locally hosted zone
    #[serde(default)]
    pub zone: ZoneConfig,

    /// Iterative resolution starting point and limits
    #[serde(default)]
    pub recursion: RecursionConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ironzone.toml in current directory
    /// 3. /etc/ironzone/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("ironzone.toml").exists() {
            Self::from_file("ironzone.toml")?
        } else if std::path::Path::new("/etc/ironzone/config.toml").exists() {
            Self::from_file("/etc/ironzone/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(zone) = overrides.zone_path {
            self.zone.path = Some(zone);
        }
        if let Some(root) = overrides.root_server {
            self.recursion.root_server = root;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.zone.path.as_deref().map_or(true, str::is_empty) {
            return Err(ConfigError::Validation(
                "No zone file configured".to_string(),
            ));
        }

        if self.recursion.root_address().is_none() {
            return Err(ConfigError::Validation(format!(
                "Root server '{}' is not an IPv4 address",
                self.recursion.root_server
            )));
        }

        if self.recursion.upstream_port == 0 {
            return Err(ConfigError::Validation(
                "Upstream port cannot be 0".to_string(),
            ));
        }

        if self.recursion.max_hops == 0 {
            return Err(ConfigError::Validation(
                "max_hops must be at least 1".to_string(),
            ));
        }

        if self.recursion.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "query_timeout_ms must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub zone_path: Option<String>,
    pub root_server: Option<String>,
    pub log_level: Option<String>,
}
