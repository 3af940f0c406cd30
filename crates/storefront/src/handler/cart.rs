use crate::{
    middleware::{auth::auth_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::{StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::DynCartService,
    domain::{
        requests::{CreateCartRequest, FindAllCarts, UpdateCartRequest},
        responses::{ApiResponse, CartResponse},
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/carts",
    tag = "Cart",
    security(("bearer_auth" = [])),
    params(FindAllCarts),
    responses(
        (status = 200, description = "List of carts", body = ApiResponse<Vec<CartResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No cart matched", body = ErrorResponse)
    )
)]
pub async fn get_carts(
    Extension(service): Extension<DynCartService>,
    Query(params): Query<FindAllCarts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/carts/{id}",
    tag = "Cart",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Cart ID")),
    responses(
        (status = 200, description = "Cart details", body = ApiResponse<CartResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Cart not found", body = ErrorResponse)
    )
)]
pub async fn get_cart(
    Extension(service): Extension<DynCartService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/carts/user/{id}",
    tag = "Cart",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Carts owned by the user", body = ApiResponse<Vec<CartResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User has no carts", body = ErrorResponse)
    )
)]
pub async fn get_user_carts(
    Extension(service): Extension<DynCartService>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_user(user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/carts",
    tag = "Cart",
    security(("bearer_auth" = [])),
    request_body = CreateCartRequest,
    responses(
        (status = 201, description = "Cart created", body = ApiResponse<CartResponse>),
        (status = 400, description = "Validation error or unknown product/user", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn create_cart(
    Extension(service): Extension<DynCartService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_cart(&body).await?;
    let location = format!("/carts/{}", response.data.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}

#[utoipa::path(
    patch,
    path = "/carts/{id}",
    tag = "Cart",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Cart ID")),
    request_body = UpdateCartRequest,
    responses(
        (status = 200, description = "Cart updated", body = ApiResponse<CartResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Cart not found", body = ErrorResponse)
    )
)]
pub async fn update_cart(
    Extension(service): Extension<DynCartService>,
    Path(id): Path<i64>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_cart(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/carts/{id}",
    tag = "Cart",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Cart ID")),
    responses(
        (status = 200, description = "Cart deleted", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Cart not found", body = ErrorResponse)
    )
)]
pub async fn delete_cart(
    Extension(service): Extension<DynCartService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_cart(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/carts", get(get_carts).post(create_cart))
        .route(
            "/carts/{id}",
            get(get_cart).patch(update_cart).delete(delete_cart),
        )
        .route("/carts/user/{id}", get(get_user_carts))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.cart_service.clone()))
        .layer(Extension(app_state.di_container.auth_service.clone()))
}
