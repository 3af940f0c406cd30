use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::DynSearchService,
    domain::{
        requests::SearchQuery,
        responses::{ApiResponse, SearchResponse},
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/search",
    tag = "Search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching categories followed by matching products", body = ApiResponse<Vec<SearchResponse>>),
        (status = 400, description = "Empty or malformed query", body = ErrorResponse),
        (status = 404, description = "Nothing matched", body = ErrorResponse)
    )
)]
pub async fn search_handler(
    Extension(service): Extension<DynSearchService>,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse, HttpError> {
    params
        .validate()
        .map_err(|e| HttpError::BadRequest(e.to_string()))?;

    let response = service.search(&params.q).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn search_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/search", get(search_handler))
        .layer(Extension(app_state.di_container.search_service.clone()))
}
