//! Users Repository
//!
//! Queries against the `users` table.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::models::User;

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT
)";

// == User Repository ==
/// Thin wrapper around a pool; cheap to clone.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // == Migrate ==
    /// Creates the schema if it does not exist yet.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
        info!("Users schema is up to date");
        Ok(())
    }

    // == List ==
    pub async fn list(&self) -> Result<Vec<User>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    // == Find By Id ==
    /// Returns every row matching `id`: zero or one.
    pub async fn find_by_id(&self, id: i64) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_all(&self.pool)
            .await
    }

    // == Create ==
    /// Inserts a user and returns the new row id.
    pub async fn create(&self, name: &str, email: Option<&str>) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
            .bind(name)
            .bind(email)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    // == Update Name ==
    /// Renames a user. Returns the number of rows touched.
    pub async fn update_name(&self, id: i64, name: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // == Delete ==
    /// Deletes a user. Returns the number of rows touched.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
