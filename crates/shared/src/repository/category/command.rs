use crate::{
    abstract_trait::{CategoryCommandRepositoryTrait, VersionedUpdate},
    config::ConnectionPool,
    domain::requests::{CreateCategoryRequest, UpdateCategoryRequest, Versioned},
    errors::{RepositoryError, Resource},
    model::Category,
    repository::{translate, translate_versioned},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct CategoryCommandRepository {
    db: ConnectionPool,
}

impl CategoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for CategoryCommandRepository {
    async fn create_category(
        &self,
        category: &CreateCategoryRequest,
    ) -> Result<Category, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at, updated_at, version
            "#,
        )
        .bind(&category.name)
        .bind(&category.description)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            let err = translate(err, Resource::Category);
            error!("❌ Failed to create category {}: {err}", category.name);
            err
        })?;

        info!("✅ Created category ID {} ({})", result.id, result.name);
        Ok(result)
    }

    async fn delete_category(&self, id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                let err = translate(err, Resource::Category);
                error!("❌ Failed to delete category {id}: {err}");
                err
            })?;

        if result.rows_affected() != 1 {
            return Err(RepositoryError::NotFound(Resource::Category));
        }

        info!("🗑️ Deleted category {id} and its products");
        Ok(())
    }
}

#[async_trait]
impl VersionedUpdate<Category, UpdateCategoryRequest> for CategoryCommandRepository {
    async fn update(
        &self,
        id: i64,
        patch: &UpdateCategoryRequest,
    ) -> Result<Category, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;
        let version = patch.expected_version();

        let result = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = COALESCE($1, name),
                description = COALESCE($2, description),
                updated_at = NOW(),
                version = version + 1
            WHERE id = $3 AND version = $4
            RETURNING id, name, description, created_at, updated_at, version
            "#,
        )
        .bind(patch.name.as_deref())
        .bind(patch.description.as_deref())
        .bind(id)
        .bind(version)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            let err = translate_versioned(err, Resource::Category);
            error!("❌ Failed to update category {id} at version {version}: {err}");
            err
        })?;

        info!(
            "🔄 Updated category ID {} to version {}",
            result.id, result.version
        );
        Ok(result)
    }
}
