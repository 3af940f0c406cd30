use crate::model::Token;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    pub expiry: String,
}

impl From<Token> for TokenResponse {
    fn from(value: Token) -> Self {
        Self {
            token: value.plain,
            expiry: value.expiry.to_rfc3339(),
        }
    }
}
