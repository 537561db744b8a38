use crate::models::User;
use sqlx::SqlitePool;

/// Looks up a user by username. Returns `None` when no such user exists.
pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Inserts a new user and returns the stored record with its generated id.
///
/// Username uniqueness is enforced by the table constraint; callers check for
/// an existing user first and a racing duplicate surfaces as a database error.
pub async fn insert(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (username, password_hash) VALUES (?, ?)
         RETURNING id, username, password_hash",
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}
