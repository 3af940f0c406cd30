use crate::{
    abstract_trait::CategoryQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::FindAllCategories,
    errors::{RepositoryError, Resource},
    model::Category,
    repository::{
        SelectQuery, equality_fragment, pagination_fragment, sort_fragment, translate,
    },
};
use async_trait::async_trait;
use tracing::{error, info};

const SELECT_CATEGORIES: &str =
    "SELECT id, name, description, created_at, updated_at, version FROM categories";

pub struct CategoryQueryRepository {
    db: ConnectionPool,
}

impl CategoryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for CategoryQueryRepository {
    async fn find_all(
        &self,
        filter: &FindAllCategories,
    ) -> Result<Vec<Category>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let mut query = SelectQuery::new(SELECT_CATEGORIES)
            .with(sort_fragment(filter.sort.as_ref()))
            .with(equality_fragment("id", filter.id.unwrap_or_default()))
            .with(equality_fragment(
                "name",
                filter.name.clone().unwrap_or_default(),
            ))
            .with(pagination_fragment(filter.limit, filter.offset))
            .into_builder();

        let categories = query
            .build_query_as::<Category>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|err| {
                let err = translate(err, Resource::Category);
                error!("❌ Failed to list categories: {err}");
                err
            })?;

        if categories.is_empty() {
            return Err(RepositoryError::NotFound(Resource::Category));
        }

        info!("✅ Found {} categories", categories.len());
        Ok(categories)
    }

    async fn find_by_id(&self, id: i64) -> Result<Category, RepositoryError> {
        if id <= 0 {
            return Err(RepositoryError::NotFound(Resource::Category));
        }

        let filter = FindAllCategories {
            id: Some(id),
            ..Default::default()
        };

        self.find_all(&filter)
            .await?
            .into_iter()
            .next()
            .ok_or(RepositoryError::NotFound(Resource::Category))
    }
}
