use crate::{
    abstract_trait::{
        CategoryServiceTrait, DynCategoryCommandRepository, DynCategoryQueryRepository,
        VersionedUpdate,
    },
    domain::{
        requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        responses::{ApiResponse, CategoryResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct CategoryService {
    query: DynCategoryQueryRepository,
    command: DynCategoryCommandRepository,
    metrics: Metrics,
}

impl CategoryService {
    pub async fn new(
        query: DynCategoryQueryRepository,
        command: DynCategoryCommandRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "category_service",
            "CategoryService",
        );

        Self {
            query,
            command,
            metrics,
        }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn find_all(
        &self,
        req: &FindAllCategories,
    ) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_all_categories", Method::Get);

        let result = self.query.find_all(req).await;
        tracing_ctx.complete(&self.metrics, &result);

        let categories = result?.into_iter().map(CategoryResponse::from).collect();
        Ok(ApiResponse::success(
            "Categories retrieved successfully",
            categories,
        ))
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_category_by_id", Method::Get);

        let result = self.query.find_by_id(id).await;
        tracing_ctx.complete(&self.metrics, &result);

        Ok(ApiResponse::success(
            "Category retrieved successfully",
            result?.into(),
        ))
    }

    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        info!("🏗️ Creating category {}", req.name);
        let tracing_ctx = TracingContext::start("create_category", Method::Post);

        let result = self.command.create_category(req).await;
        tracing_ctx.complete(&self.metrics, &result);

        Ok(ApiResponse::success(
            "Category created successfully",
            result?.into(),
        ))
    }

    async fn update_category(
        &self,
        id: i64,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        info!("🔄 Updating category {id} at version {}", req.version);
        let tracing_ctx = TracingContext::start("update_category", Method::Patch);

        let result = self.command.update(id, req).await;
        tracing_ctx.complete(&self.metrics, &result);

        Ok(ApiResponse::success(
            "Category updated successfully",
            result?.into(),
        ))
    }

    async fn delete_category(&self, id: i64) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting category {id}");
        let tracing_ctx = TracingContext::start("delete_category", Method::Delete);

        let result = self.command.delete_category(id).await;
        tracing_ctx.complete(&self.metrics, &result);

        result?;
        Ok(ApiResponse::success("Category deleted successfully", ()))
    }
}
