use crate::{domain::requests::Versioned, repository::SortColumn};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CategorySort {
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

impl SortColumn for CategorySort {
    fn column(&self) -> &'static str {
        match self {
            CategorySort::Id => "id",
            CategorySort::Name => "name",
            CategorySort::CreatedAt => "created_at",
            CategorySort::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct FindAllCategories {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub sort: Option<CategorySort>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 500, message = "Name must be 1 to 500 characters"))]
    pub name: String,

    #[validate(length(max = 5000))]
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 500, message = "Name must be 1 to 500 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    #[validate(range(min = 1))]
    pub version: i32,
}

impl Versioned for UpdateCategoryRequest {
    fn expected_version(&self) -> i32 {
        self.version
    }
}
