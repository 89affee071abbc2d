//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod i18n;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::i18n::I18nConfig;
pub use self::logging::LoggingConfig;

/// Failure while assembling the application configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    /// A source could not be read or merged.
    #[error("failed to build config: {0}")]
    Build(#[source] config::ConfigError),
    /// The merged sources do not match the schema.
    #[error("failed to deserialize config: {0}")]
    Deserialize(#[source] config::ConfigError),
}

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay). Every
/// section has defaults, so an empty file yields a usable configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Document store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Localization settings.
    #[serde(default)]
    pub i18n: I18nConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Document store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Logical database name used to namespace collections.
    #[serde(default = "default_database_name")]
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: default_database_name(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default` with an environment-specific overlay
    /// (`config/{env}`) and environment variables prefixed with `PAGEHUB`.
    pub fn load(env: &str) -> Result<Self, ConfigLoadError> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("PAGEHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(ConfigLoadError::Build)?
            .try_deserialize()
            .map_err(ConfigLoadError::Deserialize)
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigLoadError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .map_err(ConfigLoadError::Build)?
            .try_deserialize()
            .map_err(ConfigLoadError::Deserialize)
    }
}

fn default_database_name() -> String {
    "pagehub".to_string()
}
