use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, ProductServiceTrait,
        VersionedUpdate,
    },
    domain::{
        requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct ProductService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
    metrics: Metrics,
}

impl ProductService {
    pub async fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "product_service",
            "ProductService",
        );

        Self {
            query,
            command,
            metrics,
        }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_all_products", Method::Get);

        let result = self.query.find_all(req).await;
        tracing_ctx.complete(&self.metrics, &result);

        let products = result?.into_iter().map(ProductResponse::from).collect();
        Ok(ApiResponse::success(
            "Products retrieved successfully",
            products,
        ))
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_product_by_id", Method::Get);

        let result = self.query.find_by_id(id).await;
        tracing_ctx.complete(&self.metrics, &result);

        Ok(ApiResponse::success(
            "Product retrieved successfully",
            result?.into(),
        ))
    }

    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🏗️ Creating product {}", req.name);
        let tracing_ctx = TracingContext::start("create_product", Method::Post);

        let result = self.command.create_product(req).await;
        tracing_ctx.complete(&self.metrics, &result);

        Ok(ApiResponse::success(
            "Product created successfully",
            result?.into(),
        ))
    }

    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🔄 Updating product {id} at version {}", req.version);
        let tracing_ctx = TracingContext::start("update_product", Method::Patch);

        let result = self.command.update(id, req).await;
        tracing_ctx.complete(&self.metrics, &result);

        Ok(ApiResponse::success(
            "Product updated successfully",
            result?.into(),
        ))
    }

    async fn delete_product(&self, id: i64) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting product {id}");
        let tracing_ctx = TracingContext::start("delete_product", Method::Delete);

        let result = self.command.delete_product(id).await;
        tracing_ctx.complete(&self.metrics, &result);

        result?;
        Ok(ApiResponse::success("Product deleted successfully", ()))
    }
}
