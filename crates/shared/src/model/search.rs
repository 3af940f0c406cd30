use crate::model::{Category, Product};
use serde::Serialize;

/// One full-text hit, tagged by the table it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchResult {
    Category(Category),
    Product(Product),
}
