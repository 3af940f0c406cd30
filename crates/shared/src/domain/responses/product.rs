use crate::model::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category_id: i64,
    pub price: i64,
    pub quantity: i32,
    pub created_at: String,
    pub updated_at: String,
    pub version: i32,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            description: value.description,
            category_id: value.category_id,
            price: value.price,
            quantity: value.quantity,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
            version: value.version,
        }
    }
}
