pub mod hashmap_invoice_store;
pub mod hashmap_user_store;
pub mod postgres_invoice_store;
pub mod postgres_user_store;

pub use hashmap_invoice_store::HashMapInvoiceStore;
pub use hashmap_user_store::HashMapUserStore;
pub use postgres_invoice_store::PostgresInvoiceStore;
pub use postgres_user_store::PostgresUserStore;

/// Connection-level failures, as opposed to a statement the database
/// rejected.
pub(crate) fn is_unavailable(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}
