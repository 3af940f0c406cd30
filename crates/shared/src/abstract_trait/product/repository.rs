use crate::{
    abstract_trait::VersionedUpdate,
    domain::requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self, filter: &FindAllProducts) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandRepositoryTrait: VersionedUpdate<Product, UpdateProductRequest> {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError>;
    async fn delete_product(&self, id: i64) -> Result<(), RepositoryError>;
}
