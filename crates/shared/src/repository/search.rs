use crate::{
    abstract_trait::SearchRepositoryTrait,
    config::ConnectionPool,
    errors::{RepositoryError, Resource},
    model::{Category, Product, SearchResult},
    repository::translate,
};
use async_trait::async_trait;
use tracing::{error, info};

/// Tables covered by full-text search, in the order results are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTable {
    Categories,
    Products,
}

impl SearchTable {
    pub const ALL: [SearchTable; 2] = [SearchTable::Categories, SearchTable::Products];

    fn resource(self) -> Resource {
        match self {
            SearchTable::Categories => Resource::Category,
            SearchTable::Products => Resource::Product,
        }
    }
}

#[derive(Clone)]
pub struct SearchRepository {
    db: ConnectionPool,
}

impl SearchRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn search_table(
        &self,
        table: SearchTable,
        query: &str,
    ) -> Result<Vec<SearchResult>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows: Result<Vec<SearchResult>, sqlx::Error> = match table {
            SearchTable::Categories => sqlx::query_as::<_, Category>(
                r#"
                SELECT id, name, description, created_at, updated_at, version
                FROM categories
                WHERE to_tsvector('simple', name) @@ to_tsquery('simple', $1)
                "#,
            )
            .bind(query)
            .fetch_all(&mut *conn)
            .await
            .map(|rows| rows.into_iter().map(SearchResult::Category).collect()),

            SearchTable::Products => sqlx::query_as::<_, Product>(
                r#"
                SELECT id, name, description, category_id, price, quantity,
                       created_at, updated_at, version
                FROM products
                WHERE to_tsvector('simple', name) @@ to_tsquery('simple', $1)
                "#,
            )
            .bind(query)
            .fetch_all(&mut *conn)
            .await
            .map(|rows| rows.into_iter().map(SearchResult::Product).collect()),
        };

        rows.map_err(|err| {
            let err = translate(err, table.resource());
            error!("❌ Search on {table:?} failed: {err}");
            err
        })
    }
}

#[async_trait]
impl SearchRepositoryTrait for SearchRepository {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, RepositoryError> {
        let mut results = Vec::new();

        for table in SearchTable::ALL {
            results.extend(self.search_table(table, query).await?);
        }

        if results.is_empty() {
            info!("🔍 No search results for {query:?}");
            return Err(RepositoryError::NoSearchResult);
        }

        info!("✅ Search for {query:?} returned {} hits", results.len());
        Ok(results)
    }
}
