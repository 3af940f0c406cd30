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
    routing::{get, patch, post},
};
use shared::{
    abstract_trait::DynCategoryService,
    domain::{
        requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        responses::{ApiResponse, CategoryResponse},
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/categories",
    tag = "Category",
    params(FindAllCategories),
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponse>>),
        (status = 404, description = "No category matched", body = ErrorResponse)
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynCategoryService>,
    Query(params): Query<FindAllCategories>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "Category",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn get_category(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/categories",
    tag = "Category",
    security(("bearer_auth" = [])),
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "Category name already taken", body = ErrorResponse)
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_category(&body).await?;
    let location = format!("/categories/{}", response.data.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}

#[utoipa::path(
    patch,
    path = "/categories/{id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "Stale version or duplicate name", body = ErrorResponse)
    )
)]
pub async fn update_category(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i64>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_category(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category and its products deleted", body = serde_json::Value),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn delete_category(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_category(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let protected = OpenApiRouter::new()
        .route("/categories", post(create_category))
        .route(
            "/categories/{id}",
            patch(update_category).delete(delete_category),
        )
        .route_layer(middleware::from_fn(auth_middleware));

    OpenApiRouter::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}", get(get_category))
        .merge(protected)
        .layer(Extension(app_state.di_container.category_service.clone()))
        .layer(Extension(app_state.di_container.auth_service.clone()))
}
