use crate::{
    abstract_trait::{
        CartServiceTrait, DynCartCommandRepository, DynCartQueryRepository, UnversionedUpdate,
    },
    domain::{
        requests::{CreateCartRequest, FindAllCarts, UpdateCartRequest},
        responses::{ApiResponse, CartResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct CartService {
    query: DynCartQueryRepository,
    command: DynCartCommandRepository,
    metrics: Metrics,
}

impl CartService {
    pub async fn new(
        query: DynCartQueryRepository,
        command: DynCartCommandRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "cart_service", "CartService");

        Self {
            query,
            command,
            metrics,
        }
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn find_all(
        &self,
        req: &FindAllCarts,
    ) -> Result<ApiResponse<Vec<CartResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_all_carts", Method::Get);

        let result = self.query.find_all(req).await;
        tracing_ctx.complete(&self.metrics, &result);

        let carts = result?.into_iter().map(CartResponse::from).collect();
        Ok(ApiResponse::success("Carts retrieved successfully", carts))
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_cart_by_id", Method::Get);

        let result = self.query.find_by_id(id).await;
        tracing_ctx.complete(&self.metrics, &result);

        Ok(ApiResponse::success(
            "Cart retrieved successfully",
            result?.into(),
        ))
    }

    async fn find_by_user(
        &self,
        user_id: i64,
    ) -> Result<ApiResponse<Vec<CartResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_carts_by_user", Method::Get);

        let result = self.query.find_by_user(user_id).await;
        tracing_ctx.complete(&self.metrics, &result);

        let carts = result?.into_iter().map(CartResponse::from).collect();
        Ok(ApiResponse::success("Carts retrieved successfully", carts))
    }

    async fn create_cart(
        &self,
        req: &CreateCartRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        info!(
            "🛒 Adding product {} x{} to user {}",
            req.product_id, req.quantity, req.user_id
        );
        let tracing_ctx = TracingContext::start("create_cart", Method::Post);

        let result = self.command.create_cart(req).await;
        tracing_ctx.complete(&self.metrics, &result);

        Ok(ApiResponse::success(
            "Cart created successfully",
            result?.into(),
        ))
    }

    async fn update_cart(
        &self,
        id: i64,
        req: &UpdateCartRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("update_cart", Method::Patch);

        let result = self.command.update(id, req).await;
        tracing_ctx.complete(&self.metrics, &result);

        Ok(ApiResponse::success(
            "Cart updated successfully",
            result?.into(),
        ))
    }

    async fn delete_cart(&self, id: i64) -> Result<ApiResponse<()>, ServiceError> {
        let tracing_ctx = TracingContext::start("delete_cart", Method::Delete);

        let result = self.command.delete_cart(id).await;
        tracing_ctx.complete(&self.metrics, &result);

        result?;
        Ok(ApiResponse::success("Cart deleted successfully", ()))
    }
}
