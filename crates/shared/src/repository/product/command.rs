use crate::{
    abstract_trait::{ProductCommandRepositoryTrait, VersionedUpdate},
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest, Versioned},
    errors::{RepositoryError, Resource},
    model::Product,
    repository::{translate, translate_versioned},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        product: &CreateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, category_id, price, quantity)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, category_id, price, quantity,
                      created_at, updated_at, version
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.category_id)
        .bind(product.price)
        .bind(product.quantity)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            let err = translate(err, Resource::Product);
            error!("❌ Failed to create product {}: {err}", product.name);
            err
        })?;

        info!("✅ Created product ID {} ({})", result.id, result.name);
        Ok(result)
    }

    async fn delete_product(&self, id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                let err = translate(err, Resource::Product);
                error!("❌ Failed to delete product {id}: {err}");
                err
            })?;

        if result.rows_affected() != 1 {
            info!("⚠️ Product {id} not found for deletion");
            return Err(RepositoryError::NotFound(Resource::Product));
        }

        info!("🗑️ Deleted product {id}");
        Ok(())
    }
}

#[async_trait]
impl VersionedUpdate<Product, UpdateProductRequest> for ProductCommandRepository {
    async fn update(
        &self,
        id: i64,
        patch: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;
        let version = patch.expected_version();

        let result = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = COALESCE($1, name),
                description = COALESCE($2, description),
                category_id = COALESCE($3, category_id),
                price = COALESCE($4, price),
                quantity = COALESCE($5, quantity),
                updated_at = NOW(),
                version = version + 1
            WHERE id = $6 AND version = $7
            RETURNING id, name, description, category_id, price, quantity,
                      created_at, updated_at, version
            "#,
        )
        .bind(patch.name.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.category_id)
        .bind(patch.price)
        .bind(patch.quantity)
        .bind(id)
        .bind(version)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            let err = translate_versioned(err, Resource::Product);
            error!("❌ Failed to update product {id} at version {version}: {err}");
            err
        })?;

        info!("🔄 Updated product ID {} to version {}", result.id, result.version);
        Ok(result)
    }
}
