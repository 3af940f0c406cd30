mod auth;
mod cart;
mod category;
mod health;
mod product;
mod search;
mod user;

use crate::state::AppState;
use anyhow::Result;
use axum::{
    Json, Router,
    body::Body,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{errors::ErrorResponse, utils::shutdown_signal};
use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::cart::cart_routes;
pub use self::category::category_routes;
pub use self::health::{HealthResponse, health_handler};
pub use self::product::product_routes;
pub use self::search::search_routes;
pub use self::user::user_routes;

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_handler,

        auth::login_user_handler,

        user::get_users,
        user::get_user,
        user::register_user,
        user::update_user,
        user::delete_user,

        category::get_categories,
        category::get_category,
        category::create_category,
        category::update_category,
        category::delete_category,

        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        cart::get_carts,
        cart::get_cart,
        cart::get_user_carts,
        cart::create_cart,
        cart::update_cart,
        cart::delete_cart,

        search::search_handler,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "User", description = "User endpoints"),
        (name = "Category", description = "Category endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Search", description = "Full-text search over categories and products"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(utoipa::openapi::security::Http::new(
                    utoipa::openapi::security::HttpAuthScheme::Bearer,
                )),
            );
        }
    }
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        Body::from(buffer),
    )
        .into_response()
}

async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            status: "error".to_string(),
            message: "the requested url not found".to_string(),
        }),
    )
}

async fn method_not_allowed_handler() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            status: "error".to_string(),
            message: "the requested method not allowed".to_string(),
        }),
    )
}

pub struct AppRouter;

impl AppRouter {
    /// Assembles every route, the swagger UI and the request layers.
    pub fn build(app_state: AppState, request_timeout: Duration) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .route("/healthcheck", get(health_handler))
            .with_state(shared_state.clone())
            .merge(auth_routes(shared_state.clone()))
            .merge(user_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(cart_routes(shared_state.clone()))
            .merge(search_routes(shared_state));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
            .layer(TimeoutLayer::new(request_timeout))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .fallback(not_found_handler)
            .method_not_allowed_fallback(method_not_allowed_handler)
    }

    pub async fn serve(port: u16, app_state: AppState, request_timeout: Duration) -> Result<()> {
        let app = Self::build(app_state, request_timeout);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
