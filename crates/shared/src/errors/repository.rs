use serde::Serialize;
use sqlx::Error as SqlxError;
use std::fmt;
use thiserror::Error;

/// Table-backed resources a store operation can report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Product,
    Category,
    Cart,
    User,
    Token,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Product => "product",
            Resource::Category => "category",
            Resource::Cart => "cart",
            Resource::User => "user",
            Resource::Token => "token",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("{0} not found")]
    NotFound(Resource),

    #[error("{resource} with this {field} already exists")]
    Duplicate {
        resource: Resource,
        field: &'static str,
    },

    #[error("invalid {field} for {resource}")]
    ForeignKey {
        resource: Resource,
        field: &'static str,
    },

    #[error("edit conflict on {0}, reload and try again")]
    Conflict(Resource),

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("no results found")]
    NoSearchResult,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl RepositoryError {
    pub fn is_internal(&self) -> bool {
        matches!(self, RepositoryError::Sqlx(_))
    }
}
