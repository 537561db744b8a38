//! Persistence layer over a SQLite connection pool.
//!
//! Handlers never build SQL themselves: every query lives here, parameterized
//! and, for task access, scoped to an `(owner_id, task_id)` pair so ownership
//! and existence are always checked together.

pub mod tasks;
pub mod users;

use crate::config::Config;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Opens the SQLite pool described by the configuration.
///
/// The database file is created if missing. Both the pool acquire timeout and
/// SQLite's busy timeout are bounded by `config.store_timeout`, so no store
/// operation blocks indefinitely.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .busy_timeout(config.store_timeout);

    SqlitePoolOptions::new()
        .acquire_timeout(config.store_timeout)
        .connect_with(options)
        .await
}

/// Creates the `users` and `tasks` tables if they do not exist yet.
/// Called once at startup; idempotent.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             username TEXT NOT NULL UNIQUE,
             password_hash TEXT NOT NULL
         )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS tasks (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             title TEXT NOT NULL,
             description TEXT NOT NULL DEFAULT '',
             done INTEGER NOT NULL DEFAULT 0,
             user_id INTEGER NOT NULL REFERENCES users (id)
         )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    // In-memory SQLite: each connection would get its own database, so the
    // pool is pinned to a single connection.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory test database");
    init_schema(&pool).await.expect("Failed to init schema");
    pool
}
