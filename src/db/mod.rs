//! Database Module
//!
//! SQLite connection pool and the users repository.

mod users;

pub use users::UserRepository;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::config::Config;

/// Opens a connection pool for the configured database.
///
/// Connections are handed out per query and returned to the pool when the
/// query finishes, whether it succeeded or not.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;

    info!(url = %config.database_url, "Database pool opened");
    Ok(pool)
}

/// Opens a single-connection in-memory database.
///
/// Every in-memory connection is its own database, so the pool is pinned to
/// one connection that never idles out.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}
