//! Axum routes for the invoices dashboard.
//!
//! Each route extracts form fields or path parameters, hands them to a use
//! case from `tally_application` and turns the result into a response:
//!
//! ```text
//! form post ──▶ InvoiceActions ──▶ ActionResult ──▶ 303 redirect | 422 form state
//! login     ──▶ AuthenticateUseCase ──▶ identity | 401 | 500
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use tally_axum::{routes, InvoicesState};
//!
//! let app = Router::new()
//!     .route("/dashboard/invoices", get(routes::list_invoices::<S>).post(routes::create_invoice::<S>))
//!     .with_state(InvoicesState::new(actions, listing, cache));
//! ```

pub mod response;
pub mod routes;

pub use response::ActionResponse;
pub use routes::invoices::InvoicesState;
