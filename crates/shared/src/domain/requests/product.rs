use crate::{domain::requests::Versioned, repository::SortColumn};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    Id,
    Name,
    Price,
    Quantity,
    CreatedAt,
    UpdatedAt,
}

impl SortColumn for ProductSort {
    fn column(&self) -> &'static str {
        match self {
            ProductSort::Id => "id",
            ProductSort::Name => "name",
            ProductSort::Price => "price",
            ProductSort::Quantity => "quantity",
            ProductSort::CreatedAt => "created_at",
            ProductSort::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct FindAllProducts {
    pub id: Option<i64>,
    pub category_id: Option<i64>,
    pub name: Option<String>,
    pub sort: Option<ProductSort>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 500, message = "Name must be 1 to 500 characters"))]
    pub name: String,

    #[validate(length(max = 5000))]
    #[serde(default)]
    pub description: String,

    #[validate(range(min = 1, message = "category_id is required"))]
    pub category_id: i64,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price: i64,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i32,
}

/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 500, message = "Name must be 1 to 500 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    #[validate(range(min = 1))]
    pub category_id: Option<i64>,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price: Option<i64>,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: Option<i32>,

    #[validate(range(min = 1))]
    pub version: i32,
}

impl Versioned for UpdateProductRequest {
    fn expected_version(&self) -> i32 {
        self.version
    }
}
