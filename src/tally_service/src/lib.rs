mod helpers;
mod request_tracing;
mod tally_service;

pub use helpers::{configure_postgresql, get_postgres_pool, run_migrations};
pub use tally_service::TallyService;
