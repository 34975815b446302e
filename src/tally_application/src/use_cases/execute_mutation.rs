use chrono::Utc;
use serde::Deserialize;
use tally_core::{InvoiceDraft, InvoiceId, InvoiceStore, MutationOutcome, NewInvoice};

/// Whether the delete path is allowed to reach the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletePolicy {
    /// Every delete fails before touching the store.
    #[default]
    Fault,
    /// Deletes go through. Known deviation from the deployed behaviour,
    /// only enabled explicitly through configuration.
    Enabled,
}

/// Raised instead of an outcome. Not a store failure: the store is never
/// contacted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MutationFault {
    #[error("Failed to Delete Invoice")]
    DeleteDisabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create(InvoiceDraft),
    Update(InvoiceId, InvoiceDraft),
    Delete(InvoiceId),
}

/// Runs a single statement per mutation and turns store failures into
/// [`MutationOutcome::StoreFailed`].
#[derive(Clone)]
pub struct MutationExecutor<I>
where
    I: InvoiceStore,
{
    invoice_store: I,
    delete_policy: DeletePolicy,
}

impl<I> MutationExecutor<I>
where
    I: InvoiceStore,
{
    pub fn new(invoice_store: I, delete_policy: DeletePolicy) -> Self {
        Self {
            invoice_store,
            delete_policy,
        }
    }

    pub async fn execute(&self, mutation: Mutation) -> Result<MutationOutcome, MutationFault> {
        match mutation {
            Mutation::Create(draft) => Ok(self.create(draft).await),
            Mutation::Update(id, draft) => Ok(self.update(&id, &draft).await),
            Mutation::Delete(id) => self.delete(&id).await,
        }
    }

    /// Inserts the draft dated today (UTC).
    #[tracing::instrument(name = "MutationExecutor::create", skip_all)]
    pub async fn create(&self, draft: InvoiceDraft) -> MutationOutcome {
        let invoice = NewInvoice {
            draft,
            date: Utc::now().date_naive(),
        };

        match self.invoice_store.insert_invoice(&invoice).await {
            Ok(()) => MutationOutcome::Success,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create invoice");
                MutationOutcome::StoreFailed {
                    message: "Database Error: Failed to Create Invoice.".to_owned(),
                }
            }
        }
    }

    /// Rewrites customer, amount and status. The date is left as created.
    #[tracing::instrument(name = "MutationExecutor::update", skip(self, draft))]
    pub async fn update(&self, id: &InvoiceId, draft: &InvoiceDraft) -> MutationOutcome {
        match self.invoice_store.update_invoice(id, draft).await {
            Ok(0) => {
                tracing::warn!("Update matched no invoice");
                MutationOutcome::Success
            }
            Ok(_) => MutationOutcome::Success,
            Err(e) => {
                tracing::error!(error = %e, "Failed to update invoice");
                MutationOutcome::StoreFailed {
                    message: "Database Error: Failed to Update Invoice.".to_owned(),
                }
            }
        }
    }

    /// Fails with [`MutationFault::DeleteDisabled`] unless deletes are enabled.
    pub fn ensure_delete_enabled(&self) -> Result<(), MutationFault> {
        match self.delete_policy {
            DeletePolicy::Fault => Err(MutationFault::DeleteDisabled),
            DeletePolicy::Enabled => Ok(()),
        }
    }

    #[tracing::instrument(name = "MutationExecutor::delete", skip(self))]
    pub async fn delete(&self, id: &InvoiceId) -> Result<MutationOutcome, MutationFault> {
        self.ensure_delete_enabled()?;

        let outcome = match self.invoice_store.delete_invoice(id).await {
            Ok(0) => {
                tracing::warn!("Delete matched no invoice");
                MutationOutcome::Success
            }
            Ok(_) => MutationOutcome::Success,
            Err(e) => {
                tracing::error!(error = %e, "Failed to delete invoice");
                delete_failed()
            }
        };
        Ok(outcome)
    }
}

pub(crate) fn delete_failed() -> MutationOutcome {
    MutationOutcome::StoreFailed {
        message: "Database Error: Failed to Delete Invoice.".to_owned(),
    }
}
