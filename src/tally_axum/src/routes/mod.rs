//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors to get data from requests, call the
//! use cases and convert results to Axum responses.

pub mod invoices;
pub mod login;

pub use invoices::{create_invoice, delete_invoice, list_invoices, update_invoice};
pub use login::login;
