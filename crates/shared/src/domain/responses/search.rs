use crate::{
    domain::responses::{CategoryResponse, ProductResponse},
    model::SearchResult,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Serialized as `{"category": {...}}` or `{"product": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchResponse {
    Category(CategoryResponse),
    Product(ProductResponse),
}

impl From<SearchResult> for SearchResponse {
    fn from(value: SearchResult) -> Self {
        match value {
            SearchResult::Category(category) => SearchResponse::Category(category.into()),
            SearchResult::Product(product) => SearchResponse::Product(product.into()),
        }
    }
}
