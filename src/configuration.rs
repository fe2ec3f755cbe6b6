use std::collections::HashMap;

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use sqlx::mysql::{MySqlConnectOptions, MySqlSslMode};

#[derive(Deserialize, Clone, Debug)]
pub struct Configuration {
    pub database: DatabaseSettings,
    #[serde(default)]
    pub resources: ResourceSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: Secret<String>,
    pub port: u16,
    pub host: String,
    pub database_name: String,
    #[serde(default)]
    pub require_ssl: bool,
}

/// How logical resource ids map onto physical tables.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ResourceSettings {
    #[serde(default)]
    pub table_prefix: String,
    // e.g. `enterprise_logging` on installs without the enterprise modules
    #[serde(default)]
    pub excluded_modules: Vec<String>,
    #[serde(default)]
    pub entities: HashMap<String, String>,
}

pub fn get_config() -> Result<Configuration, config::ConfigError> {
    // initialise config reader, env vars win over the yaml file
    let configs = config::Config::builder()
        .add_source(config::File::new("config.yaml", config::FileFormat::Yaml).required(false))
        .add_source(
            config::Environment::with_prefix("DBCLEAN")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    // convert the config values to config type
    configs.try_deserialize::<Configuration>()
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let ssl_mode = if self.require_ssl {
            MySqlSslMode::Required
        } else {
            MySqlSslMode::Preferred
        };
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(self.password.expose_secret())
            .database(&self.database_name)
            .ssl_mode(ssl_mode)
    }
}
