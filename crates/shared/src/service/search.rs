use crate::{
    abstract_trait::{DynSearchRepository, SearchServiceTrait},
    domain::responses::{ApiResponse, SearchResponse},
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct SearchService {
    repository: DynSearchRepository,
    metrics: Metrics,
}

impl SearchService {
    pub async fn new(repository: DynSearchRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "search_service",
            "SearchService",
        );

        Self {
            repository,
            metrics,
        }
    }
}

#[async_trait]
impl SearchServiceTrait for SearchService {
    async fn search(
        &self,
        query: &str,
    ) -> Result<ApiResponse<Vec<SearchResponse>>, ServiceError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::Validation(vec![
                "search query must not be empty".to_string(),
            ]));
        }

        let tracing_ctx = TracingContext::start("search", Method::Get);

        let result = self.repository.search(query).await;
        tracing_ctx.complete(&self.metrics, &result);

        let hits = result?.into_iter().map(SearchResponse::from).collect();
        Ok(ApiResponse::success("Search completed successfully", hits))
    }
}
