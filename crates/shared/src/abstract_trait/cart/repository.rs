use crate::{
    abstract_trait::UnversionedUpdate,
    domain::requests::{CreateCartRequest, FindAllCarts, UpdateCartRequest},
    errors::RepositoryError,
    model::Cart,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCartQueryRepository = Arc<dyn CartQueryRepositoryTrait + Send + Sync>;
pub type DynCartCommandRepository = Arc<dyn CartCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CartQueryRepositoryTrait {
    async fn find_all(&self, filter: &FindAllCarts) -> Result<Vec<Cart>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Cart, RepositoryError>;
    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Cart>, RepositoryError>;
}

#[async_trait]
pub trait CartCommandRepositoryTrait: UnversionedUpdate<Cart, UpdateCartRequest> {
    async fn create_cart(&self, req: &CreateCartRequest) -> Result<Cart, RepositoryError>;
    async fn delete_cart(&self, id: i64) -> Result<(), RepositoryError>;
}
