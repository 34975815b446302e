//! Axum-specific login route.

use axum::{Form, Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use tally_application::{AuthError, AuthenticateUseCase};
use tally_core::{PasswordHashing, UserStore};
use thiserror::Error;

/// Axum login route.
///
/// Responds with the authenticated identity. Issuing a session for it is up
/// to whoever mounts this route.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H>(
    State(use_case): State<AuthenticateUseCase<U, H>>,
    Form(request): Form<LoginRequest>,
) -> Result<impl IntoResponse, LoginError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHashing + Clone + 'static,
{
    let email = request.email.unwrap_or_else(|| Secret::from(String::new()));
    let password = request
        .password
        .unwrap_or_else(|| Secret::from(String::new()));

    match use_case.execute(email, password).await? {
        Some(user) => Ok(Json(user)),
        None => Err(LoginError::InvalidCredentials),
    }
}

/// Form body for login. Missing fields are treated as malformed credentials.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Invalid credentials.")]
    InvalidCredentials,
    #[error("Authentication unavailable: {0}")]
    Unavailable(#[from] AuthError),
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            LoginError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            LoginError::Unavailable(e) => {
                tracing::error!(error = %e, "Login failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong.".to_owned(),
                )
            }
        };

        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}
