//! Connection configuration for the Hearthstay database.
//!
//! Configuration comes from the environment (optionally seeded from a
//! `.env` file):
//!
//!   DATABASE_URL                 # Postgres connection string (required)
//!   DATABASE_MAX_CONNECTIONS     # pool size (default: 10)

use std::env;

use crate::error::{DbError, DbResult};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Connection settings for the Hearthstay database.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Postgres connection string, e.g. `postgres://localhost/hearthstay`.
    pub database_url: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
}

impl DbConfig {
    /// Create a config for the given connection string with the default
    /// pool size.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Load configuration from the environment.
    ///
    /// A `.env` file in the working directory is read first when present;
    /// variables already set in the environment win. `DATABASE_URL` is
    /// required, `DATABASE_MAX_CONNECTIONS` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Config`] when `DATABASE_URL` is missing or the
    /// pool size is not a positive integer.
    pub fn from_env() -> DbResult<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| DbError::config("DATABASE_URL is not set"))?;
        let max_connections =
            parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok().as_deref())?;

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}

/// Parse the pool-size override, falling back to the default when unset.
fn parse_max_connections(raw: Option<&str>) -> DbResult<u32> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_MAX_CONNECTIONS);
    };

    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            DbError::config(format!(
                "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{}'",
                raw
            ))
        })
}
