//! Environment configuration.
//!
//! Values are read from the process environment, which `main` first populates from a `.env`
//! file when one is present.

use crate::error::config::ConfigError;

/// Environment configuration for connecting to the catalog store.
pub struct Config {
    /// `postgres://…` or `sqlite:…` connection string
    pub database_url: String,
    /// Upper bound for the connection pool, driver default when unset.
    pub max_connections: Option<u32>,
    /// Whether sqlx logs every statement.
    pub sqlx_logging: bool,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// `DATABASE_URL` is required. `DATABASE_MAX_CONNECTIONS` and `DATABASE_SQL_LOGGING` are
    /// optional and must parse when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            max_connections: optional_var("DATABASE_MAX_CONNECTIONS")?,
            sqlx_logging: optional_var("DATABASE_SQL_LOGGING")?.unwrap_or(false),
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional_var<T>(var: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
