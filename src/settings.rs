use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_PATH: &str = "config/settings_dev";

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database: DatabaseConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            url: None,
            protocol: "postgres".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            host: "localhost".to_string(),
            port: "5432".to_string(),
            database: "".to_string(),
        }
    }
}

impl Settings {
    /// Reads `path` (YAML) and then `USERS_SCHEMA__*` environment variables,
    /// e.g. `USERS_SCHEMA__DATABASE__HOST`. Only the default path may be
    /// missing, for setups configured entirely from the environment.
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::new(path, FileFormat::Yaml).required(path != DEFAULT_PATH))
            .add_source(
                Environment::with_prefix("USERS_SCHEMA")
                    .prefix_separator("__")
                    .separator("__"),
            );

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config = builder.build()?;

        config.try_deserialize()
    }
}

impl DatabaseConfig {
    pub fn db_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }

        format!(
            "{}://{}:{}@{}:{}/{}",
            self.protocol, self.user, self.password, self.host, self.port, self.database
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub log_level: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection URL; takes precedence over the individual parts.
    pub url: Option<String>,
    pub protocol: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub database: String,
}
