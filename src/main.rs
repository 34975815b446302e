use color_eyre::eyre::Result;
use tally::{
    Argon2Hasher, PostgresInvoiceStore, PostgresUserStore, Settings, TallyService,
    configure_postgresql,
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = Settings::load()?;

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql(&config.postgres).await?;

    // Create stores
    let user_store = PostgresUserStore::new(pg_pool.clone());
    let invoice_store = PostgresInvoiceStore::new(pg_pool);

    let service = TallyService::new(
        user_store,
        Argon2Hasher::default(),
        invoice_store,
        &config.invoices,
    );

    let listener = tokio::net::TcpListener::bind(&config.application.address).await?;
    tracing::info!(
        delete_policy = ?config.invoices.delete_policy,
        "Starting tally service..."
    );

    service.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
