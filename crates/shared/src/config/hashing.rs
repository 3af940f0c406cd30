use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{hash, verify};

const COST: u32 = 4;

#[derive(Clone)]
pub struct Hashing;

impl Hashing {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<Vec<u8>, ServiceError> {
        let hashed = hash(password, COST).map_err(ServiceError::Bcrypt)?;
        Ok(hashed.into_bytes())
    }

    async fn compare_password(
        &self,
        hashed_password: &[u8],
        password: &str,
    ) -> Result<(), ServiceError> {
        let hashed = std::str::from_utf8(hashed_password)
            .map_err(|_| ServiceError::Internal("stored password hash is not utf-8".into()))?;

        match verify(password, hashed)? {
            true => Ok(()),
            false => Err(ServiceError::InvalidCredentials),
        }
    }
}
