use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Cart {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub user_id: i64,
}
