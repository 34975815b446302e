use secrecy::ExposeSecret;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};
use tally_adapters::config::PostgresSettings;

/// Create a PostgreSQL connection pool and bring the schema up to date
///
/// # Arguments
/// * `settings` - Connection URL, pool size and TLS requirement
///
/// # Returns
/// A PgPool ready to hand to the stores
pub async fn configure_postgresql(settings: &PostgresSettings) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(settings).await?;
    run_migrations(&pg_pool).await?;
    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `settings` - Connection URL, pool size and TLS requirement
///
/// # Returns
/// Result containing the PgPool or an error
pub async fn get_postgres_pool(settings: &PostgresSettings) -> Result<PgPool, sqlx::Error> {
    let mut options = settings.url.expose_secret().parse::<PgConnectOptions>()?;
    if settings.require_ssl {
        options = options.ssl_mode(PgSslMode::Require);
    }

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pg_pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("../../migrations").run(pg_pool).await?;
    Ok(())
}
