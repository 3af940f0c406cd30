use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl HttpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) | RepositoryError::NoSearchResult => {
                HttpError::NotFound(err.to_string())
            }
            RepositoryError::Duplicate { .. } | RepositoryError::Conflict(_) => {
                HttpError::Conflict(err.to_string())
            }
            RepositoryError::ForeignKey { .. } | RepositoryError::InvalidInput(_) => {
                HttpError::BadRequest(err.to_string())
            }
            RepositoryError::InvalidToken => HttpError::Unauthorized(err.to_string()),
            RepositoryError::Sqlx(_) => {
                error!("💥 Unhandled repository error: {err:?}");
                HttpError::Internal("Internal server error".into())
            }
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => HttpError::from(repo_err),

            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".to_string())
            }

            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::Bcrypt(_) | ServiceError::Internal(_) => {
                error!("💥 Unhandled service error: {err:?}");
                HttpError::Internal("Internal server error".into())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let msg = match self {
            HttpError::BadRequest(msg)
            | HttpError::Unauthorized(msg)
            | HttpError::NotFound(msg)
            | HttpError::Conflict(msg)
            | HttpError::Internal(msg) => msg,
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Resource;

    #[test]
    fn store_errors_map_to_client_statuses() {
        let cases = [
            (
                RepositoryError::NotFound(Resource::Cart),
                StatusCode::NOT_FOUND,
            ),
            (RepositoryError::NoSearchResult, StatusCode::NOT_FOUND),
            (
                RepositoryError::Conflict(Resource::Product),
                StatusCode::CONFLICT,
            ),
            (
                RepositoryError::Duplicate {
                    resource: Resource::User,
                    field: "email",
                },
                StatusCode::CONFLICT,
            ),
            (
                RepositoryError::ForeignKey {
                    resource: Resource::Cart,
                    field: "user_id",
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                RepositoryError::InvalidInput("bad query".into()),
                StatusCode::BAD_REQUEST,
            ),
            (RepositoryError::InvalidToken, StatusCode::UNAUTHORIZED),
        ];

        for (err, expected) in cases {
            assert_eq!(HttpError::from(err).status_code(), expected);
        }
    }

    #[test]
    fn internal_errors_hide_backend_detail() {
        let err = ServiceError::Repo(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut));
        match HttpError::from(err) {
            HttpError::Internal(msg) => assert_eq!(msg, "Internal server error"),
            other => panic!("expected internal error, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_message_names_the_resource() {
        let err = RepositoryError::Duplicate {
            resource: Resource::Category,
            field: "name",
        };
        match HttpError::from(err) {
            HttpError::Conflict(msg) => assert_eq!(msg, "category with this name already exists"),
            other => panic!("expected conflict, got {other:?}"),
        }
    }
}
