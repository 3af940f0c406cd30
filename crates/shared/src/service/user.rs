use crate::{
    abstract_trait::{
        DynHashing, DynUserCommandRepository, DynUserQueryRepository, UnversionedUpdate,
        UserServiceTrait,
    },
    domain::{
        requests::{CreateUserRequest, FindAllUsers, UpdateUserRequest, UserPatch},
        responses::{ApiResponse, UserResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct UserService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
    metrics: Metrics,
}

impl UserService {
    pub async fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        hashing: DynHashing,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "user_service", "UserService");

        Self {
            query,
            command,
            hashing,
            metrics,
        }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn find_all(
        &self,
        req: &FindAllUsers,
    ) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_all_users", Method::Get);

        let result = self.query.find_all(req).await;
        tracing_ctx.complete(&self.metrics, &result);

        let users = result?.into_iter().map(UserResponse::from).collect();
        Ok(ApiResponse::success("Users retrieved successfully", users))
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("find_user_by_id", Method::Get);

        let result = self.query.find_by_id(id).await;
        tracing_ctx.complete(&self.metrics, &result);

        Ok(ApiResponse::success(
            "User retrieved successfully",
            result?.into(),
        ))
    }

    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("👤 Registering user {}", req.email);
        let tracing_ctx = TracingContext::start("create_user", Method::Post);

        let result = match self.hashing.hash_password(&req.password).await {
            Ok(hashed) => self
                .command
                .create_user(&req.email, &hashed)
                .await
                .map_err(ServiceError::from),
            Err(e) => Err(e),
        };
        tracing_ctx.complete(&self.metrics, &result);

        Ok(ApiResponse::success(
            "User created successfully",
            result?.into(),
        ))
    }

    async fn update_user(
        &self,
        id: i64,
        req: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        if req.email.is_none() && req.password.is_none() {
            return Err(ServiceError::Validation(vec![
                "at least one of email or password is required".to_string(),
            ]));
        }

        let tracing_ctx = TracingContext::start("update_user", Method::Patch);

        let password_hash = match &req.password {
            Some(password) => Some(self.hashing.hash_password(password).await?),
            None => None,
        };

        let patch = UserPatch {
            email: req.email.clone(),
            password_hash,
        };

        let result = self.command.update(id, &patch).await;
        tracing_ctx.complete(&self.metrics, &result);

        Ok(ApiResponse::success(
            "User updated successfully",
            result?.into(),
        ))
    }

    async fn delete_user(&self, id: i64) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting user {id}");
        let tracing_ctx = TracingContext::start("delete_user", Method::Delete);

        let result = self.command.delete_user(id).await;
        tracing_ctx.complete(&self.metrics, &result);

        result?;
        Ok(ApiResponse::success("User deleted successfully", ()))
    }
}
