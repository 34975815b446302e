use async_trait::async_trait;
use thiserror::Error;

use crate::domain::password::{HashedPassword, Password};

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
    #[error("Password hasher unavailable: {0}")]
    Unavailable(String),
}

/// Slow, salted password hashing.
#[async_trait]
pub trait PasswordHashing: Send + Sync {
    async fn hash_password(&self, password: Password) -> Result<HashedPassword, PasswordHashError>;
    /// `Ok(false)` on a mismatch. The comparison takes the same time
    /// wherever the candidate first differs.
    async fn verify_password(
        &self,
        password: Password,
        expected: HashedPassword,
    ) -> Result<bool, PasswordHashError>;
}

/// Marks the cached rendering of a path as stale.
#[async_trait]
pub trait PathRevalidator: Send + Sync {
    async fn revalidate_path(&self, path: &str);
}
