use crate::{
    abstract_trait::TokenRepositoryTrait,
    config::ConnectionPool,
    errors::{RepositoryError, Resource},
    model::Token,
    repository::translate,
    utils::hash_token,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct TokenRepository {
    db: ConnectionPool,
}

impl TokenRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TokenRepositoryTrait for TokenRepository {
    async fn create_token(&self, token: &Token) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("INSERT INTO tokens (hashed, user_id, expiry) VALUES ($1, $2, $3)")
            .bind(&token.hashed)
            .bind(token.user_id)
            .bind(token.expiry)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                let err = translate(err, Resource::Token);
                error!("❌ Failed to store token for user {}: {err}", token.user_id);
                err
            })?;

        info!("🔑 Issued token for user {}", token.user_id);
        Ok(())
    }

    async fn get_user_id(&self, plain: &str) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;
        let hashed = hash_token(plain);

        let user_id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT users.id
            FROM users
            INNER JOIN tokens ON users.id = tokens.user_id
            WHERE tokens.hashed = $1 AND tokens.expiry > NOW()
            "#,
        )
        .bind(hashed)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            let err = translate(err, Resource::Token);
            error!("❌ Failed to resolve token: {err}");
            err
        })?;

        user_id.ok_or(RepositoryError::InvalidToken)
    }
}
