use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use tally_core::{HashedPassword, Password, PasswordHashError, PasswordHashing};

/// Argon2id hashing, run on the blocking pool so a slow hash does not stall
/// other requests.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        // m=15000 KiB, t=2, p=1 are valid parameters, so this cannot fail.
        let params = Params::new(15000, 2, 1, None).unwrap_or_default();
        Self::new(params)
    }
}

#[async_trait::async_trait]
impl PasswordHashing for Argon2Hasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash_password(&self, password: Password) -> Result<HashedPassword, PasswordHashError> {
        let current_span: tracing::Span = tracing::Span::current();
        let hasher = self.argon2();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                hasher
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| HashedPassword::new(Secret::from(h.to_string())))
                    .map_err(|e| PasswordHashError::Unavailable(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHashError::Unavailable(e.to_string()))?;

        result
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify_password(
        &self,
        password: Password,
        expected: HashedPassword,
    ) -> Result<bool, PasswordHashError> {
        let current_span: tracing::Span = tracing::Span::current();
        let verifier = self.argon2();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_hash: PasswordHash<'_> =
                    PasswordHash::new(expected.as_ref().expose_secret())
                        .map_err(|e| PasswordHashError::MalformedHash(e.to_string()))?;

                match verifier
                    .verify_password(password.as_ref().expose_secret().as_bytes(), &expected_hash)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHashError::MalformedHash(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHashError::Unavailable(e.to_string()))?;

        result
    }
}
