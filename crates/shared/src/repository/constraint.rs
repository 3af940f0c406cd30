use crate::errors::{RepositoryError, Resource};
use sqlx::error::ErrorKind;

// Postgres reports malformed tsquery input as a syntax error.
const SYNTAX_ERROR: &str = "42601";

/// Looks up the domain error for a named constraint violation.
pub fn constraint_error(kind: ErrorKind, constraint: &str) -> Option<RepositoryError> {
    let err = match (kind, constraint) {
        (ErrorKind::UniqueViolation, "products_name_key") => RepositoryError::Duplicate {
            resource: Resource::Product,
            field: "name",
        },
        (ErrorKind::ForeignKeyViolation, "products_category_id_fkey") => {
            RepositoryError::ForeignKey {
                resource: Resource::Product,
                field: "category_id",
            }
        }
        (ErrorKind::UniqueViolation, "categories_name_key") => RepositoryError::Duplicate {
            resource: Resource::Category,
            field: "name",
        },
        (ErrorKind::UniqueViolation, "users_email_key") => RepositoryError::Duplicate {
            resource: Resource::User,
            field: "email",
        },
        (ErrorKind::ForeignKeyViolation, "carts_user_id_fkey") => RepositoryError::ForeignKey {
            resource: Resource::Cart,
            field: "user_id",
        },
        (ErrorKind::ForeignKeyViolation, "carts_product_id_fkey") => {
            RepositoryError::ForeignKey {
                resource: Resource::Cart,
                field: "product_id",
            }
        }
        (ErrorKind::ForeignKeyViolation, "tokens_user_id_fkey") => RepositoryError::InvalidToken,
        _ => return None,
    };

    Some(err)
}

/// Converts a driver error raised while operating on `resource`.
///
/// Unknown failures stay wrapped as [`RepositoryError::Sqlx`].
pub fn translate(err: sqlx::Error, resource: Resource) -> RepositoryError {
    if let sqlx::Error::RowNotFound = err {
        return RepositoryError::NotFound(resource);
    }

    if let sqlx::Error::Database(db_err) = &err {
        let kind = db_err.kind();

        if let Some(mapped) = db_err
            .constraint()
            .and_then(|name| constraint_error(kind, name))
        {
            return mapped;
        }

        if let ErrorKind::CheckViolation = db_err.kind() {
            return RepositoryError::InvalidInput(format!(
                "{resource} violates {}",
                db_err.constraint().unwrap_or("a check constraint")
            ));
        }

        if db_err.code().as_deref() == Some(SYNTAX_ERROR) {
            return RepositoryError::InvalidInput("malformed search query".into());
        }
    }

    RepositoryError::Sqlx(err)
}

/// Variant of [`translate`] for version-checked updates, where an empty
/// `RETURNING` means the id or version did not match.
pub fn translate_versioned(err: sqlx::Error, resource: Resource) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::Conflict(resource),
        other => translate(other, resource),
    }
}
