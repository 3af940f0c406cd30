use crate::{
    abstract_trait::{AuthServiceTrait, DynHashing, DynTokenRepository, DynUserQueryRepository},
    domain::{
        requests::LoginRequest,
        responses::{ApiResponse, TokenResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, TracingContext, generate_token},
};
use async_trait::async_trait;
use chrono::Duration;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub struct AuthService {
    hash: DynHashing,
    users: DynUserQueryRepository,
    tokens: DynTokenRepository,
    token_ttl: Duration,
    metrics: Metrics,
}

pub struct AuthServiceDeps {
    pub hash: DynHashing,
    pub users: DynUserQueryRepository,
    pub tokens: DynTokenRepository,
    pub token_ttl: Duration,
    pub registry: Arc<Mutex<Registry>>,
}

impl AuthService {
    pub async fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            hash,
            users,
            tokens,
            token_ttl,
            registry,
        } = deps;

        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await, "auth_service", "AuthService");

        Self {
            hash,
            users,
            tokens,
            token_ttl,
            metrics,
        }
    }

    async fn issue_token(&self, req: &LoginRequest) -> Result<TokenResponse, ServiceError> {
        let user = match self.users.find_by_email(&req.email).await {
            Ok(user) => user,
            Err(RepositoryError::NotFound(_)) => {
                warn!("🔒 Login attempt for unknown email {}", req.email);
                return Err(ServiceError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };

        self.hash
            .compare_password(&user.password_hash, &req.password)
            .await?;

        let token = generate_token(user.id, self.token_ttl)
            .map_err(|e| ServiceError::Internal(format!("failed to generate token: {e}")))?;

        self.tokens.create_token(&token).await?;

        info!("🔑 User {} logged in", user.id);
        Ok(token.into())
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("login", Method::Post);

        let result = self.issue_token(req).await;
        tracing_ctx.complete(&self.metrics, &result);

        Ok(ApiResponse::success("Login successful", result?))
    }

    async fn authenticate(&self, token: &str) -> Result<i64, ServiceError> {
        if token.is_empty() {
            return Err(RepositoryError::InvalidToken.into());
        }

        Ok(self.tokens.get_user_id(token).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{HashingTrait, TokenRepositoryTrait, UserQueryRepositoryTrait},
        config::Hashing,
        domain::requests::FindAllUsers,
        errors::Resource,
        model::{Token, User},
        utils::hash_token,
    };
    use chrono::Utc;
    use std::sync::Mutex as StdMutex;

    struct FakeUsers {
        users: Vec<User>,
    }

    #[async_trait]
    impl UserQueryRepositoryTrait for FakeUsers {
        async fn find_all(&self, _filter: &FindAllUsers) -> Result<Vec<User>, RepositoryError> {
            Ok(self.users.clone())
        }

        async fn find_by_id(&self, id: i64) -> Result<User, RepositoryError> {
            self.users
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .ok_or(RepositoryError::NotFound(Resource::User))
        }

        async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError> {
            self.users
                .iter()
                .find(|u| u.email == email)
                .cloned()
                .ok_or(RepositoryError::NotFound(Resource::User))
        }
    }

    #[derive(Default)]
    struct FakeTokens {
        stored: StdMutex<Vec<Token>>,
    }

    #[async_trait]
    impl TokenRepositoryTrait for FakeTokens {
        async fn create_token(&self, token: &Token) -> Result<(), RepositoryError> {
            self.stored.lock().unwrap().push(token.clone());
            Ok(())
        }

        async fn get_user_id(&self, plain: &str) -> Result<i64, RepositoryError> {
            let hashed = hash_token(plain);
            self.stored
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.hashed == hashed && t.expiry > Utc::now())
                .map(|t| t.user_id)
                .ok_or(RepositoryError::InvalidToken)
        }
    }

    async fn service_with_user(email: &str, password: &str) -> (AuthService, Arc<FakeTokens>) {
        let hashing = Hashing::new();
        let password_hash = hashing.hash_password(password).await.unwrap();
        let user = User {
            id: 11,
            email: email.to_string(),
            password_hash,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let tokens = Arc::new(FakeTokens::default());
        let service = AuthService::new(AuthServiceDeps {
            hash: Arc::new(hashing),
            users: Arc::new(FakeUsers { users: vec![user] }),
            tokens: tokens.clone(),
            token_ttl: Duration::hours(1),
            registry: Arc::new(Mutex::new(Registry::default())),
        })
        .await;

        (service, tokens)
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn login_issues_a_token_that_authenticates() {
        let (service, tokens) = service_with_user("ada@example.com", "hunter2hunter2").await;

        let response = service
            .login(&login("ada@example.com", "hunter2hunter2"))
            .await
            .unwrap();

        assert_eq!(tokens.stored.lock().unwrap().len(), 1);
        assert_ne!(
            tokens.stored.lock().unwrap()[0].hashed,
            response.data.token.as_bytes().to_vec()
        );
        assert_eq!(service.authenticate(&response.data.token).await.unwrap(), 11);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let (service, tokens) = service_with_user("ada@example.com", "hunter2hunter2").await;

        let wrong_password = service
            .login(&login("ada@example.com", "not-the-password"))
            .await;
        let unknown_email = service
            .login(&login("bob@example.com", "hunter2hunter2"))
            .await;

        assert!(matches!(wrong_password, Err(ServiceError::InvalidCredentials)));
        assert!(matches!(unknown_email, Err(ServiceError::InvalidCredentials)));
        assert!(tokens.stored.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_or_empty_tokens_are_rejected() {
        let (service, _) = service_with_user("ada@example.com", "hunter2hunter2").await;

        assert!(matches!(
            service.authenticate("").await,
            Err(ServiceError::Repo(RepositoryError::InvalidToken))
        ));
        assert!(matches!(
            service.authenticate("made-up-token").await,
            Err(ServiceError::Repo(RepositoryError::InvalidToken))
        ));
    }
}
