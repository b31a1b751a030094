//! Connection configuration.
//!
//! `ConnectConfig` is a plain deserializable record; how the host
//! application discovers it (file, env, flags) is its own business.

use serde::Deserialize;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

fn default_port() -> u16 {
    3306
}

fn default_max_connections() -> u32 {
    10
}

/// Settings needed to open a MySQL pool.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl ConnectConfig {
    /// Maps the record onto sqlx connect options.
    #[must_use]
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    /// Opens a connection pool sized by `max_connections`.
    pub async fn connect(&self) -> Result<MySqlPool, sqlx::Error> {
        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(self.connect_options())
            .await
    }
}
