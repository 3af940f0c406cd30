use crate::{
    domain::{
        requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        responses::{ApiResponse, CategoryResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllCategories,
    ) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn update_category(
        &self,
        id: i64,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn delete_category(&self, id: i64) -> Result<ApiResponse<()>, ServiceError>;
}
