use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents a task entity as stored in the database and returned by the API.
///
/// The wire shape is `{id, title, description, done}`; the owning user id is
/// never serialized.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique identifier for the task (generated by the store).
    pub id: i64,
    /// The title of the task.
    pub title: String,
    /// Description of the task; empty string when not provided.
    pub description: String,
    /// Whether the task has been completed.
    pub done: bool,
    /// Identifier of the user who owns the task. Internal only.
    #[serde(skip)]
    pub user_id: i64,
}

/// Input structure for creating a task.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewTask {
    /// The title of the task. Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// An optional description for the task; defaults to empty.
    /// Maximum length of 1000 characters if provided.
    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

/// Input structure for updating a task. Every field is optional; fields left
/// out retain their previous value.
#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct TaskPatch {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub done: Option<bool>,
}
