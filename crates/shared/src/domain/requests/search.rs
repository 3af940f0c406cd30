use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
pub struct SearchQuery {
    /// Full-text query in `to_tsquery` syntax, e.g. `chair & oak`.
    #[validate(length(min = 1, max = 200, message = "Search query must be 1 to 200 characters"))]
    pub q: String,
}
