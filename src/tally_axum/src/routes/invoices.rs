//! Axum-specific invoice routes.

use axum::{
    Form, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tally_adapters::cache::ListingCache;
use tally_application::{InvoiceActions, ListInvoicesUseCase, MutationFault};
use tally_core::{InvoiceForm, InvoiceId, InvoiceStore};
use thiserror::Error;
use uuid::Uuid;

use crate::response::ActionResponse;

/// Shared state of the invoice routes.
#[derive(Clone)]
pub struct InvoicesState<I>
where
    I: InvoiceStore,
{
    pub actions: InvoiceActions<I, ListingCache>,
    pub listing: ListInvoicesUseCase<I>,
    pub cache: ListingCache,
}

impl<I> InvoicesState<I>
where
    I: InvoiceStore,
{
    pub fn new(
        actions: InvoiceActions<I, ListingCache>,
        listing: ListInvoicesUseCase<I>,
        cache: ListingCache,
    ) -> Self {
        Self {
            actions,
            listing,
            cache,
        }
    }
}

/// The invoices listing, cached under the listing path until a mutation
/// invalidates it.
#[tracing::instrument(name = "List invoices", skip_all)]
pub async fn list_invoices<I>(
    State(state): State<InvoicesState<I>>,
) -> Result<impl IntoResponse, InvoicesError>
where
    I: InvoiceStore + Clone + 'static,
{
    let listing = state
        .cache
        .get_or_load(state.actions.listing_path(), || state.listing.execute())
        .await
        .map_err(|_| InvoicesError::FetchFailed)?;

    Ok(Json(listing.as_ref().clone()))
}

#[tracing::instrument(name = "Create invoice", skip_all)]
pub async fn create_invoice<I>(
    State(state): State<InvoicesState<I>>,
    Form(form): Form<InvoiceForm>,
) -> Result<ActionResponse, InvoicesError>
where
    I: InvoiceStore + Clone + 'static,
{
    let result = state.actions.create_invoice(form).await?;
    Ok(result.into())
}

#[tracing::instrument(name = "Update invoice", skip(state, form))]
pub async fn update_invoice<I>(
    State(state): State<InvoicesState<I>>,
    Path(id): Path<Uuid>,
    Form(form): Form<InvoiceForm>,
) -> Result<ActionResponse, InvoicesError>
where
    I: InvoiceStore + Clone + 'static,
{
    let result = state
        .actions
        .update_invoice(InvoiceId::from(id), form)
        .await?;
    Ok(result.into())
}

/// The id is taken as raw text: the delete fault has to fire for any id,
/// well-formed or not.
#[tracing::instrument(name = "Delete invoice", skip(state))]
pub async fn delete_invoice<I>(
    State(state): State<InvoicesState<I>>,
    Path(id): Path<String>,
) -> Result<ActionResponse, InvoicesError>
where
    I: InvoiceStore + Clone + 'static,
{
    let result = state.actions.delete_invoice(&id).await?;
    Ok(result.into())
}

/// Errors that can occur on the invoice routes outside of form handling
#[derive(Debug, Error)]
pub enum InvoicesError {
    #[error("Database Error: Failed to Fetch Invoices.")]
    FetchFailed,
    #[error(transparent)]
    Fault(#[from] MutationFault),
}

impl IntoResponse for InvoicesError {
    fn into_response(self) -> axum::response::Response {
        if let InvoicesError::Fault(fault) = &self {
            tracing::error!(error = %fault, "Invoice mutation aborted");
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
