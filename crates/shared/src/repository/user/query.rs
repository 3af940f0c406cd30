use crate::{
    abstract_trait::UserQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::FindAllUsers,
    errors::{RepositoryError, Resource},
    model::User,
    repository::{
        SelectQuery, equality_fragment, pagination_fragment, sort_fragment, translate,
    },
};
use async_trait::async_trait;
use tracing::{error, info};

const SELECT_USERS: &str =
    "SELECT id, email, password_hash, created_at, updated_at FROM users";

pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_all(&self, filter: &FindAllUsers) -> Result<Vec<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let mut query = SelectQuery::new(SELECT_USERS)
            .with(sort_fragment(filter.sort.as_ref()))
            .with(equality_fragment("id", filter.id.unwrap_or_default()))
            .with(equality_fragment(
                "email",
                filter.email.clone().unwrap_or_default(),
            ))
            .with(pagination_fragment(filter.limit, filter.offset))
            .into_builder();

        let users = query
            .build_query_as::<User>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|err| {
                let err = translate(err, Resource::User);
                error!("❌ Failed to list users: {err}");
                err
            })?;

        if users.is_empty() {
            return Err(RepositoryError::NotFound(Resource::User));
        }

        info!("✅ Found {} users", users.len());
        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        if id <= 0 {
            return Err(RepositoryError::NotFound(Resource::User));
        }

        let filter = FindAllUsers {
            id: Some(id),
            ..Default::default()
        };

        self.find_all(&filter)
            .await?
            .into_iter()
            .next()
            .ok_or(RepositoryError::NotFound(Resource::User))
    }

    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        if email.is_empty() {
            return Err(RepositoryError::NotFound(Resource::User));
        }

        let filter = FindAllUsers {
            email: Some(email.to_string()),
            ..Default::default()
        };

        self.find_all(&filter)
            .await?
            .into_iter()
            .next()
            .ok_or(RepositoryError::NotFound(Resource::User))
    }
}
