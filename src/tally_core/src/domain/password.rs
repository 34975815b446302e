use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// Shortest password a credential may carry.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A plaintext password that satisfies the shape rules. Never persisted.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().chars().count() >= MIN_PASSWORD_LENGTH {
            Ok(Self(value))
        } else {
            Err(UserError::InvalidPassword)
        }
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Hash of a password as stored next to the user record.
///
/// The string is a PHC-formatted hash, so it names the algorithm and its
/// parameters alongside the salt and digest.
#[derive(Debug, Clone)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    pub fn new(phc: Secret<String>) -> Self {
        Self(phc)
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
