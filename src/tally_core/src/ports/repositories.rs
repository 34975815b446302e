use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    invoice::{Invoice, InvoiceDraft, InvoiceId, NewInvoice},
    user::UserRecord,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User store unavailable: {0}")]
    Unavailable(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::Unavailable(_), Self::Unavailable(_))
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: UserRecord) -> Result<(), UserStoreError>;
    /// Exact match on the address. `Ok(None)` when nobody is registered
    /// under it; errors are reserved for a store that could not answer.
    async fn find_user_by_email(&self, email: &Email)
    -> Result<Option<UserRecord>, UserStoreError>;
}

// InvoiceStore port trait and errors
#[derive(Debug, Error)]
pub enum InvoiceStoreError {
    #[error("Invoice store unavailable: {0}")]
    Unavailable(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl PartialEq for InvoiceStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Unavailable(_), Self::Unavailable(_))
                | (Self::QueryFailed(_), Self::QueryFailed(_))
        )
    }
}

/// Each method issues exactly one statement.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn insert_invoice(&self, invoice: &NewInvoice) -> Result<(), InvoiceStoreError>;
    /// Returns the number of rows touched.
    async fn update_invoice(
        &self,
        id: &InvoiceId,
        draft: &InvoiceDraft,
    ) -> Result<u64, InvoiceStoreError>;
    /// Returns the number of rows removed.
    async fn delete_invoice(&self, id: &InvoiceId) -> Result<u64, InvoiceStoreError>;
    /// Newest first.
    async fn fetch_invoices(&self) -> Result<Vec<Invoice>, InvoiceStoreError>;
}
