use crate::{
    abstract_trait::{
        DynAuthService, DynCartService, DynCategoryService, DynHashing, DynProductService,
        DynSearchRepository, DynSearchService, DynTokenRepository, DynUserService,
    },
    config::ConnectionPool,
    repository::{
        CartRepository, CategoryRepository, ProductRepository, SearchRepository, TokenRepository,
        UserRepository,
    },
    service::{
        AuthService, AuthServiceDeps, CartService, CategoryService, ProductService, SearchService,
        UserService,
    },
};
use chrono::Duration;
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_service: DynProductService,
    pub category_service: DynCategoryService,
    pub cart_service: DynCartService,
    pub user_service: DynUserService,
    pub auth_service: DynAuthService,
    pub search_service: DynSearchService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_service", &"<ProductService>")
            .field("category_service", &"<CategoryService>")
            .field("cart_service", &"<CartService>")
            .field("user_service", &"<UserService>")
            .field("auth_service", &"<AuthService>")
            .field("search_service", &"<SearchService>")
            .finish()
    }
}

pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub registry: Arc<Mutex<Registry>>,
    pub token_ttl: Duration,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hash,
            registry,
            token_ttl,
        } = deps;

        let product_repository = ProductRepository::new(pool.clone());
        let category_repository = CategoryRepository::new(pool.clone());
        let cart_repository = CartRepository::new(pool.clone());
        let user_repository = UserRepository::new(pool.clone());
        let token_repository = Arc::new(TokenRepository::new(pool.clone())) as DynTokenRepository;
        let search_repository = Arc::new(SearchRepository::new(pool)) as DynSearchRepository;

        let product_service = Arc::new(
            ProductService::new(
                product_repository.query,
                product_repository.command,
                registry.clone(),
            )
            .await,
        ) as DynProductService;

        let category_service = Arc::new(
            CategoryService::new(
                category_repository.query,
                category_repository.command,
                registry.clone(),
            )
            .await,
        ) as DynCategoryService;

        let cart_service = Arc::new(
            CartService::new(
                cart_repository.query,
                cart_repository.command,
                registry.clone(),
            )
            .await,
        ) as DynCartService;

        let auth_deps = AuthServiceDeps {
            hash: hash.clone(),
            users: user_repository.query.clone(),
            tokens: token_repository,
            token_ttl,
            registry: registry.clone(),
        };

        let auth_service = Arc::new(AuthService::new(auth_deps).await) as DynAuthService;

        let user_service = Arc::new(
            UserService::new(
                user_repository.query,
                user_repository.command,
                hash,
                registry.clone(),
            )
            .await,
        ) as DynUserService;

        let search_service =
            Arc::new(SearchService::new(search_repository, registry).await) as DynSearchService;

        Self {
            product_service,
            category_service,
            cart_service,
            user_service,
            auth_service,
            search_service,
        }
    }
}
