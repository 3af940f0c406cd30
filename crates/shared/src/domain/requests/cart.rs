use crate::repository::SortColumn;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CartSort {
    Id,
    ProductId,
    UserId,
    Quantity,
}

impl SortColumn for CartSort {
    fn column(&self) -> &'static str {
        match self {
            CartSort::Id => "id",
            CartSort::ProductId => "product_id",
            CartSort::UserId => "user_id",
            CartSort::Quantity => "quantity",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct FindAllCarts {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub sort: Option<CartSort>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCartRequest {
    #[validate(range(min = 1, message = "product_id is required"))]
    pub product_id: i64,

    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,

    #[validate(range(min = 1, message = "user_id is required"))]
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCartRequest {
    #[validate(range(min = 1))]
    pub product_id: Option<i64>,

    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: Option<i32>,
}
