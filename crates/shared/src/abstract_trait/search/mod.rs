use crate::{
    domain::responses::{ApiResponse, SearchResponse},
    errors::{RepositoryError, ServiceError},
    model::SearchResult,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSearchRepository = Arc<dyn SearchRepositoryTrait + Send + Sync>;
pub type DynSearchService = Arc<dyn SearchServiceTrait + Send + Sync>;

#[async_trait]
pub trait SearchRepositoryTrait {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, RepositoryError>;
}

#[async_trait]
pub trait SearchServiceTrait {
    async fn search(&self, query: &str)
    -> Result<ApiResponse<Vec<SearchResponse>>, ServiceError>;
}
