use chrono::{DateTime, Utc};

/// Bearer token. Only `hashed` is persisted; `plain` is handed to the client once.
#[derive(Debug, Clone)]
pub struct Token {
    pub plain: String,
    pub hashed: Vec<u8>,
    pub user_id: i64,
    pub expiry: DateTime<Utc>,
}
