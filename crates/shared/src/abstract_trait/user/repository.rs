use crate::{
    abstract_trait::UnversionedUpdate,
    domain::requests::{FindAllUsers, UserPatch},
    errors::RepositoryError,
    model::User,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;
pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_all(&self, filter: &FindAllUsers) -> Result<Vec<User>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<User, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError>;
}

#[async_trait]
pub trait UserCommandRepositoryTrait: UnversionedUpdate<User, UserPatch> {
    async fn create_user(
        &self,
        email: &str,
        password_hash: &[u8],
    ) -> Result<User, RepositoryError>;
    async fn delete_user(&self, id: i64) -> Result<(), RepositoryError>;
}
