use crate::{
    abstract_trait::CartQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::FindAllCarts,
    errors::{RepositoryError, Resource},
    model::Cart,
    repository::{
        SelectQuery, equality_fragment, pagination_fragment, sort_fragment, translate,
    },
};
use async_trait::async_trait;
use tracing::{error, info};

const SELECT_CARTS: &str = "SELECT id, product_id, quantity, user_id FROM carts";

pub struct CartQueryRepository {
    db: ConnectionPool,
}

impl CartQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartQueryRepositoryTrait for CartQueryRepository {
    async fn find_all(&self, filter: &FindAllCarts) -> Result<Vec<Cart>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let mut query = SelectQuery::new(SELECT_CARTS)
            .with(sort_fragment(filter.sort.as_ref()))
            .with(equality_fragment("id", filter.id.unwrap_or_default()))
            .with(equality_fragment("user_id", filter.user_id.unwrap_or_default()))
            .with(pagination_fragment(filter.limit, filter.offset))
            .into_builder();

        let carts = query
            .build_query_as::<Cart>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|err| {
                let err = translate(err, Resource::Cart);
                error!("❌ Failed to list carts: {err}");
                err
            })?;

        if carts.is_empty() {
            return Err(RepositoryError::NotFound(Resource::Cart));
        }

        info!("✅ Found {} carts", carts.len());
        Ok(carts)
    }

    async fn find_by_id(&self, id: i64) -> Result<Cart, RepositoryError> {
        if id <= 0 {
            return Err(RepositoryError::NotFound(Resource::Cart));
        }

        let filter = FindAllCarts {
            id: Some(id),
            ..Default::default()
        };

        self.find_all(&filter)
            .await?
            .into_iter()
            .next()
            .ok_or(RepositoryError::NotFound(Resource::Cart))
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Cart>, RepositoryError> {
        if user_id <= 0 {
            return Err(RepositoryError::NotFound(Resource::Cart));
        }

        let filter = FindAllCarts {
            user_id: Some(user_id),
            ..Default::default()
        };

        self.find_all(&filter).await
    }
}
