use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use secrecy::Secret;
use serde::Deserialize;
use tally_application::DeletePolicy;

use super::constants::{CONFIG_FILE, INVOICES_LISTING_PATH, env, prod};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub postgres: PostgresSettings,
    pub invoices: InvoiceSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
    pub require_ssl: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceSettings {
    pub listing_path: String,
    #[serde(default)]
    pub delete_policy: DeletePolicy,
}

impl Settings {
    /// Defaults, then `config/tally.json` if present, then `TALLY__*`
    /// environment variables. A `.env` file is read first when there is one.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "No .env file loaded");
        }

        let builder = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR)
                    .try_parsing(true),
            );

        Self::build(builder)
    }

    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default(
                "postgres.url",
                std::env::var(env::DATABASE_URL_ENV_VAR).ok(),
            )?
            .set_default(
                "postgres.max_connections",
                i64::from(prod::MAX_DB_CONNECTIONS),
            )?
            .set_default("postgres.require_ssl", true)?
            .set_default("invoices.listing_path", INVOICES_LISTING_PATH)
    }

    pub fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
