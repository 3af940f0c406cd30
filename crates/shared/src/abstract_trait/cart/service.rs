use crate::{
    domain::{
        requests::{CreateCartRequest, FindAllCarts, UpdateCartRequest},
        responses::{ApiResponse, CartResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllCarts,
    ) -> Result<ApiResponse<Vec<CartResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn find_by_user(
        &self,
        user_id: i64,
    ) -> Result<ApiResponse<Vec<CartResponse>>, ServiceError>;
    async fn create_cart(
        &self,
        req: &CreateCartRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn update_cart(
        &self,
        id: i64,
        req: &UpdateCartRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn delete_cart(&self, id: i64) -> Result<ApiResponse<()>, ServiceError>;
}
