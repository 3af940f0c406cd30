use crate::repository::SortColumn;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserSort {
    Id,
    Email,
    CreatedAt,
}

impl SortColumn for UserSort {
    fn column(&self) -> &'static str {
        match self {
            UserSort::Id => "id",
            UserSort::Email => "email",
            UserSort::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct FindAllUsers {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub sort: Option<UserSort>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(
        email(message = "Invalid email format"),
        length(max = 500, message = "Email must not exceed 500 bytes")
    )]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8 to 72 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(
        email(message = "Invalid email format"),
        length(max = 500, message = "Email must not exceed 500 bytes")
    )]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 72, message = "Password must be 8 to 72 characters"))]
    pub password: Option<String>,
}

/// Store-level user update; the password is already hashed.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password_hash: Option<Vec<u8>>,
}
