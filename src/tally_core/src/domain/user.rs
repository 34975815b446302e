use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use super::{
    email::Email,
    password::{HashedPassword, Password},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    InvalidPassword,
}

/// An email/password pair whose shape has been checked.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: Email,
    password: Password,
}

impl Credentials {
    pub fn parse(email: Secret<String>, password: Secret<String>) -> Result<Self, UserError> {
        Ok(Self {
            email: Email::try_from(email)?,
            password: Password::try_from(password)?,
        })
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// A user row as the store holds it.
#[derive(Debug, Clone)]
pub struct UserRecord {
    id: Uuid,
    name: String,
    email: Email,
    password_hash: HashedPassword,
}

impl UserRecord {
    pub fn new(id: Uuid, name: String, email: Email, password_hash: HashedPassword) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }
}

/// The identity handed back after a successful login. Carries no hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<UserRecord> for AuthenticatedUser {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email.as_ref().expose_secret().clone(),
        }
    }
}
