//! Ownership-scoped task queries.
//!
//! Every lookup and mutation takes an `(owner_id, task_id)` pair and filters
//! on both in a single statement, so a task owned by someone else is
//! indistinguishable from a missing one.

use crate::models::{Task, TaskPatch};
use sqlx::SqlitePool;

const TASK_COLUMNS: &str = "id, title, description, done, user_id";

/// Returns all tasks owned by the given user, in insertion order.
pub async fn list_for_owner(pool: &SqlitePool, owner_id: i64) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!(
        "SELECT {} FROM tasks WHERE user_id = ? ORDER BY id",
        TASK_COLUMNS
    ))
    .bind(owner_id)
    .fetch_all(pool)
    .await
}

/// Inserts a task for the given owner and returns the stored record with its
/// generated id.
pub async fn insert(
    pool: &SqlitePool,
    owner_id: i64,
    title: &str,
    description: &str,
) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!(
        "INSERT INTO tasks (title, description, user_id) VALUES (?, ?, ?)
         RETURNING {}",
        TASK_COLUMNS
    ))
    .bind(title)
    .bind(description)
    .bind(owner_id)
    .fetch_one(pool)
    .await
}

/// Fetches a single task, scoped to its owner. `None` covers both a missing
/// task and a task owned by another user.
pub async fn find_owned(
    pool: &SqlitePool,
    owner_id: i64,
    task_id: i64,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!(
        "SELECT {} FROM tasks WHERE id = ? AND user_id = ?",
        TASK_COLUMNS
    ))
    .bind(task_id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await
}

/// Applies a partial update to a task, scoped to its owner, in one atomic
/// statement: `None` bindings leave the corresponding column untouched via
/// COALESCE, so concurrent partial updates cannot revert each other's fields.
/// Returns `None` when no owned row matched.
pub async fn update_owned(
    pool: &SqlitePool,
    owner_id: i64,
    task_id: i64,
    patch: &TaskPatch,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!(
        "UPDATE tasks SET
             title = COALESCE(?, title),
             description = COALESCE(?, description),
             done = COALESCE(?, done)
         WHERE id = ? AND user_id = ?
         RETURNING {}",
        TASK_COLUMNS
    ))
    .bind(patch.title.as_deref())
    .bind(patch.description.as_deref())
    .bind(patch.done)
    .bind(task_id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await
}

/// Deletes a task, scoped to its owner. Returns whether a row was removed.
pub async fn delete_owned(
    pool: &SqlitePool,
    owner_id: i64,
    task_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = ? AND user_id = ?")
        .bind(task_id)
        .bind(owner_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
