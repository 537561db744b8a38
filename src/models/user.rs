use serde::Serialize;
use sqlx::FromRow;

/// A persisted user record. The password hash stays internal: only id and
/// username are ever serialized.
#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
