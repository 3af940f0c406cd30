use crate::{
    abstract_trait::ProductQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::FindAllProducts,
    errors::{RepositoryError, Resource},
    model::Product,
    repository::{
        SelectQuery, equality_fragment, pagination_fragment, sort_fragment, translate,
    },
};
use async_trait::async_trait;
use tracing::{error, info};

const SELECT_PRODUCTS: &str = "SELECT id, name, description, category_id, price, quantity, \
     created_at, updated_at, version FROM products";

pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self, filter: &FindAllProducts) -> Result<Vec<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let mut query = SelectQuery::new(SELECT_PRODUCTS)
            .with(sort_fragment(filter.sort.as_ref()))
            .with(equality_fragment("id", filter.id.unwrap_or_default()))
            .with(equality_fragment(
                "category_id",
                filter.category_id.unwrap_or_default(),
            ))
            .with(equality_fragment(
                "name",
                filter.name.clone().unwrap_or_default(),
            ))
            .with(pagination_fragment(filter.limit, filter.offset))
            .into_builder();

        let products = query
            .build_query_as::<Product>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|err| {
                let err = translate(err, Resource::Product);
                error!("❌ Failed to list products: {err}");
                err
            })?;

        if products.is_empty() {
            info!("🔍 No products matched {filter:?}");
            return Err(RepositoryError::NotFound(Resource::Product));
        }

        info!("✅ Found {} products", products.len());
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        if id <= 0 {
            return Err(RepositoryError::NotFound(Resource::Product));
        }

        let filter = FindAllProducts {
            id: Some(id),
            ..Default::default()
        };

        self.find_all(&filter)
            .await?
            .into_iter()
            .next()
            .ok_or(RepositoryError::NotFound(Resource::Product))
    }
}
