use crate::model::Cart;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub user_id: i64,
}

impl From<Cart> for CartResponse {
    fn from(value: Cart) -> Self {
        CartResponse {
            id: value.id,
            product_id: value.product_id,
            quantity: value.quantity,
            user_id: value.user_id,
        }
    }
}
