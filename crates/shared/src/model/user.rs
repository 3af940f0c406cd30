use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Stored account. `password_hash` holds the bcrypt output bytes.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: Vec<u8>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
