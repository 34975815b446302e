use secrecy::Secret;
use tally_core::{
    AuthenticatedUser, Credentials, PasswordHashError, PasswordHashing, UserStore,
};

/// Failures that are not a verdict on the credentials themselves.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Failed to fetch user: {0}")]
    StoreUnavailable(String),
    #[error("Password hasher unavailable: {0}")]
    HasherUnavailable(String),
}

/// Authenticate use case - checks an email/password pair against the user store
///
/// Malformed input, an unknown email and a wrong password all end the same
/// way, with `Ok(None)`.
#[derive(Clone)]
pub struct AuthenticateUseCase<U, H>
where
    U: UserStore,
    H: PasswordHashing,
{
    user_store: U,
    hasher: H,
}

impl<U, H> AuthenticateUseCase<U, H>
where
    U: UserStore,
    H: PasswordHashing,
{
    pub fn new(user_store: U, hasher: H) -> Self {
        Self { user_store, hasher }
    }

    /// Execute the authenticate use case
    ///
    /// # Arguments
    /// * `email` - Email as typed by the user
    /// * `password` - Plaintext password as typed by the user
    ///
    /// # Returns
    /// The authenticated identity, `None` when the credentials do not match,
    /// or AuthError when the store or hasher could not be reached
    #[tracing::instrument(name = "AuthenticateUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<Option<AuthenticatedUser>, AuthError> {
        let Ok(credentials) = Credentials::parse(email, password) else {
            tracing::info!("Invalid credentials");
            return Ok(None);
        };

        let user = self
            .user_store
            .find_user_by_email(credentials.email())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to fetch user");
                AuthError::StoreUnavailable(e.to_string())
            })?;

        let Some(user) = user else {
            self.spend_comparison(&credentials).await?;
            tracing::info!("Invalid credentials");
            return Ok(None);
        };

        let matches = self
            .hasher
            .verify_password(credentials.password().clone(), user.password_hash().clone())
            .await;

        match matches {
            Ok(true) => Ok(Some(user.into())),
            Ok(false) => {
                tracing::info!("Invalid credentials");
                Ok(None)
            }
            Err(PasswordHashError::MalformedHash(e)) => {
                tracing::error!(error = %e, user_id = %user.id(), "Stored password hash is unusable");
                Ok(None)
            }
            Err(PasswordHashError::Unavailable(e)) => {
                tracing::error!(error = %e, "Password hasher unavailable");
                Err(AuthError::HasherUnavailable(e))
            }
        }
    }

    /// Costs the same as a verification so an unknown email answers no
    /// faster than a wrong password.
    async fn spend_comparison(&self, credentials: &Credentials) -> Result<(), AuthError> {
        match self.hasher.hash_password(credentials.password().clone()).await {
            Err(PasswordHashError::Unavailable(e)) => {
                tracing::error!(error = %e, "Password hasher unavailable");
                Err(AuthError::HasherUnavailable(e))
            }
            _ => Ok(()),
        }
    }
}
