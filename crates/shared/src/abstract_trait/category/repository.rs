use crate::{
    abstract_trait::VersionedUpdate,
    domain::requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
    errors::RepositoryError,
    model::Category,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCategoryQueryRepository = Arc<dyn CategoryQueryRepositoryTrait + Send + Sync>;
pub type DynCategoryCommandRepository = Arc<dyn CategoryCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryQueryRepositoryTrait {
    async fn find_all(&self, filter: &FindAllCategories)
    -> Result<Vec<Category>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Category, RepositoryError>;
}

/// Deleting a category also removes its products (`ON DELETE CASCADE`).
#[async_trait]
pub trait CategoryCommandRepositoryTrait: VersionedUpdate<Category, UpdateCategoryRequest> {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<Category, RepositoryError>;
    async fn delete_category(&self, id: i64) -> Result<(), RepositoryError>;
}
