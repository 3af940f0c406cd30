use crate::{
    abstract_trait::{CartCommandRepositoryTrait, UnversionedUpdate},
    config::ConnectionPool,
    domain::requests::{CreateCartRequest, UpdateCartRequest},
    errors::{RepositoryError, Resource},
    model::Cart,
    repository::translate,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct CartCommandRepository {
    db: ConnectionPool,
}

impl CartCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartCommandRepositoryTrait for CartCommandRepository {
    async fn create_cart(&self, cart: &CreateCartRequest) -> Result<Cart, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Cart>(
            r#"
            INSERT INTO carts (product_id, quantity, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, product_id, quantity, user_id
            "#,
        )
        .bind(cart.product_id)
        .bind(cart.quantity)
        .bind(cart.user_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            let err = translate(err, Resource::Cart);
            error!(
                "❌ Failed to create cart for user {} product {}: {err}",
                cart.user_id, cart.product_id
            );
            err
        })?;

        info!("✅ Created cart ID {} for user {}", result.id, result.user_id);
        Ok(result)
    }

    async fn delete_cart(&self, id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM carts WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                let err = translate(err, Resource::Cart);
                error!("❌ Failed to delete cart {id}: {err}");
                err
            })?;

        if result.rows_affected() != 1 {
            return Err(RepositoryError::NotFound(Resource::Cart));
        }

        info!("🗑️ Deleted cart {id}");
        Ok(())
    }
}

#[async_trait]
impl UnversionedUpdate<Cart, UpdateCartRequest> for CartCommandRepository {
    async fn update(&self, id: i64, patch: &UpdateCartRequest) -> Result<Cart, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Cart>(
            r#"
            UPDATE carts
            SET product_id = COALESCE($1, product_id),
                quantity = COALESCE($2, quantity)
            WHERE id = $3
            RETURNING id, product_id, quantity, user_id
            "#,
        )
        .bind(patch.product_id)
        .bind(patch.quantity)
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            let err = translate(err, Resource::Cart);
            error!("❌ Failed to update cart {id}: {err}");
            err
        })?;

        info!("🔄 Updated cart ID {}", result.id);
        Ok(result)
    }
}
