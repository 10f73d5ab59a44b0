//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string
    pub database_url: String,
    /// Upper bound on pooled database connections
    pub db_max_connections: u32,
    /// HTTP server port
    pub server_port: u16,
    /// TTL in milliseconds for cache writes that do not pass one
    pub cache_default_ttl_ms: u64,
    /// TTL in milliseconds for the cached users list
    pub users_cache_ttl_ms: u64,
    /// Create the schema at startup
    pub run_migrations: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` - SQLite URL (default: sqlite://users.db?mode=rwc)
    /// - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_DEFAULT_TTL_MS` - Default cache TTL (default: 60000)
    /// - `USERS_CACHE_TTL_MS` - Users list TTL (default: 60000)
    /// - `RUN_MIGRATIONS` - Create schema on startup (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", defaults.db_max_connections),
            server_port: parse_env("SERVER_PORT", defaults.server_port),
            cache_default_ttl_ms: parse_env("CACHE_DEFAULT_TTL_MS", defaults.cache_default_ttl_ms),
            users_cache_ttl_ms: parse_env("USERS_CACHE_TTL_MS", defaults.users_cache_ttl_ms),
            run_migrations: parse_env("RUN_MIGRATIONS", defaults.run_migrations),
        }
    }

    pub fn cache_default_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_default_ttl_ms)
    }

    pub fn users_cache_ttl(&self) -> Duration {
        Duration::from_millis(self.users_cache_ttl_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://users.db?mode=rwc".to_string(),
            db_max_connections: 5,
            server_port: 3000,
            cache_default_ttl_ms: crate::cache::DEFAULT_TTL_MS,
            users_cache_ttl_ms: 60_000,
            run_migrations: true,
        }
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.database_url, "sqlite://users.db?mode=rwc");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_default_ttl_ms, 60_000);
        assert_eq!(config.users_cache_ttl(), Duration::from_secs(60));
        assert!(config.run_migrations);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("DATABASE_URL");
        env::remove_var("DB_MAX_CONNECTIONS");
        env::remove_var("SERVER_PORT");
        env::remove_var("CACHE_DEFAULT_TTL_MS");
        env::remove_var("USERS_CACHE_TTL_MS");
        env::remove_var("RUN_MIGRATIONS");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_default_ttl(), Duration::from_millis(60_000));
        assert!(config.run_migrations);
    }

    #[test]
    fn test_parse_env_falls_back_on_garbage() {
        env::set_var("USERS_SERVICE_TEST_PORT", "not-a-number");
        assert_eq!(parse_env("USERS_SERVICE_TEST_PORT", 8080u16), 8080);

        env::set_var("USERS_SERVICE_TEST_PORT", "9090");
        assert_eq!(parse_env("USERS_SERVICE_TEST_PORT", 8080u16), 9090);
        env::remove_var("USERS_SERVICE_TEST_PORT");
    }
}
