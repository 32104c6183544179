use serde::Deserialize;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::policy::PolicyConfig;
use super::resolver::ResolverConfig;
use super::server::ServerConfig;
use crate::policy::MAX_MAX_AGE;

const LOCAL_CONFIG_PATH: &str = "mta-sts.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/mta-sts/config.toml";

/// Main configuration structure for the MTA-STS responder
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// HTTP listener (bind address, port)
    #[serde(default)]
    pub server: ServerConfig,

    /// DNS-over-HTTPS resolver used for MX lookups
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Mode and max age advertised in every policy
    #[serde(default)]
    pub policy: PolicyConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. mta-sts.toml in current directory
    /// 3. /etc/mta-sts/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(url) = overrides.resolver_url {
            self.resolver.url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if !self.resolver.url.starts_with("https://") && !self.resolver.url.starts_with("http://")
        {
            return Err(ConfigError::Validation(format!(
                "Resolver URL '{}' must use http or https",
                self.resolver.url
            )));
        }

        if self.resolver.query_timeout == Some(0) {
            return Err(ConfigError::Validation(
                "Resolver query timeout cannot be 0".to_string(),
            ));
        }

        if self.policy.max_age == 0 || self.policy.max_age > MAX_MAX_AGE {
            return Err(ConfigError::Validation(format!(
                "Policy max_age must be between 1 and {} seconds",
                MAX_MAX_AGE
            )));
        }

        Ok(())
    }

    /// Path of the configuration file `load` falls back to, if one exists
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub resolver_url: Option<String>,
    pub log_level: Option<String>,
}
