use crate::{
    abstract_trait::{UnversionedUpdate, UserCommandRepositoryTrait},
    config::ConnectionPool,
    domain::requests::UserPatch,
    errors::{RepositoryError, Resource},
    model::User,
    repository::translate,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(
        &self,
        email: &str,
        password_hash: &[u8],
    ) -> Result<User, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            let err = translate(err, Resource::User);
            error!("❌ Failed to create user {email}: {err}");
            err
        })?;

        info!("✅ Created user ID {}", result.id);
        Ok(result)
    }

    async fn delete_user(&self, id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                let err = translate(err, Resource::User);
                error!("❌ Failed to delete user {id}: {err}");
                err
            })?;

        if result.rows_affected() != 1 {
            return Err(RepositoryError::NotFound(Resource::User));
        }

        info!("🗑️ Deleted user {id}");
        Ok(())
    }
}

#[async_trait]
impl UnversionedUpdate<User, UserPatch> for UserCommandRepository {
    async fn update(&self, id: i64, patch: &UserPatch) -> Result<User, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = COALESCE($1, email),
                password_hash = COALESCE($2, password_hash),
                updated_at = NOW()
            WHERE id = $3
            RETURNING id, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(patch.email.as_deref())
        .bind(patch.password_hash.as_deref())
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            let err = translate(err, Resource::User);
            error!("❌ Failed to update user {id}: {err}");
            err
        })?;

        info!("🔄 Updated user ID {}", result.id);
        Ok(result)
    }
}
