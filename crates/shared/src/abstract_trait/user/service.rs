use crate::{
    domain::{
        requests::{CreateUserRequest, FindAllUsers, UpdateUserRequest},
        responses::{ApiResponse, UserResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllUsers,
    ) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn update_user(
        &self,
        id: i64,
        req: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn delete_user(&self, id: i64) -> Result<ApiResponse<()>, ServiceError>;
}
