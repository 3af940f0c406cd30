use crate::{domain::requests::Versioned, errors::RepositoryError};
use async_trait::async_trait;

/// Update guarded by an expected version.
///
/// Succeeds only when both the id and the version match; the stored version
/// is then incremented. Zero matched rows is reported as
/// [`RepositoryError::Conflict`], without telling a stale version apart from
/// a missing row.
#[async_trait]
pub trait VersionedUpdate<T, P>: Send + Sync
where
    T: Send + 'static,
    P: Versioned + Sync + 'static,
{
    async fn update(&self, id: i64, patch: &P) -> Result<T, RepositoryError>;
}

/// Last-write-wins update. Zero matched rows is [`RepositoryError::NotFound`].
#[async_trait]
pub trait UnversionedUpdate<T, P>: Send + Sync
where
    T: Send + 'static,
    P: Sync + 'static,
{
    async fn update(&self, id: i64, patch: &P) -> Result<T, RepositoryError>;
}
