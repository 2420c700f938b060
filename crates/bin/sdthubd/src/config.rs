//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `sdthub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Module registry settings.
    pub registry: RegistryConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Discovery output settings.
    pub discovery: DiscoveryConfig,
}

/// Module registry configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Namespace prefix shared by every registered capability,
    /// e.g. `org.onem2m.home`.
    pub prefix: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Discovery output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Dump the descriptor catalog to stdout as JSON after bootstrap.
    pub dump_catalog: bool,
}

impl Config {
    /// Load configuration from `sdthub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("sdthub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SDTHUB_PREFIX") {
            self.registry.prefix = val;
        }
        if let Ok(val) = std::env::var("SDTHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("SDTHUB_DUMP_CATALOG") {
            self.discovery.dump_catalog = matches!(val.as_str(), "1" | "true" | "yes");
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.registry.prefix.is_empty() {
            return Err(ConfigError::Validation(
                "registry prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            prefix: "org.onem2m.home".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sdthubd=info,sdthub_domain=info,sdthub_codec=info".to_string(),
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            dump_catalog: false,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
