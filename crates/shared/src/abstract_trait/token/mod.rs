use crate::{errors::RepositoryError, model::Token};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTokenRepository = Arc<dyn TokenRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TokenRepositoryTrait {
    /// Persists the digest of `token`; an unknown owner is `InvalidToken`.
    async fn create_token(&self, token: &Token) -> Result<(), RepositoryError>;
    /// Resolves an unexpired plaintext token to its owner.
    async fn get_user_id(&self, plain: &str) -> Result<i64, RepositoryError>;
}
