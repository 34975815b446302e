use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, PgPool};
use tally_core::{Email, HashedPassword, UserRecord, UserStore, UserStoreError};
use uuid::Uuid;

use super::is_unavailable;

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password: String,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::try_from(Secret::from(row.email))
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        Ok(UserRecord::new(
            row.id,
            row.name,
            email,
            HashedPassword::new(Secret::from(row.password)),
        ))
    }
}

fn map_error(error: sqlx::Error) -> UserStoreError {
    if is_unavailable(&error) {
        UserStoreError::Unavailable(error.to_string())
    } else {
        UserStoreError::UnexpectedError(error.to_string())
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: UserRecord) -> Result<(), UserStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO users (id, name, email, password)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id())
        .bind(user.name())
        .bind(user.email().as_ref().expose_secret())
        .bind(user.password_hash().as_ref().expose_secret());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            map_error(e)
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn find_user_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<UserRecord>, UserStoreError> {
        let query = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, password
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret());

        let row = query.fetch_optional(&self.pool).await.map_err(map_error)?;

        row.map(UserRecord::try_from).transpose()
    }
}
