use tally_core::{Invoice, InvoiceStore, InvoiceStoreError};

/// List invoices use case - reads the invoices listing from the store
#[derive(Clone)]
pub struct ListInvoicesUseCase<I>
where
    I: InvoiceStore,
{
    invoice_store: I,
}

impl<I> ListInvoicesUseCase<I>
where
    I: InvoiceStore,
{
    pub fn new(invoice_store: I) -> Self {
        Self { invoice_store }
    }

    #[tracing::instrument(name = "ListInvoicesUseCase::execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<Invoice>, InvoiceStoreError> {
        self.invoice_store.fetch_invoices().await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to fetch invoices");
        })
    }
}
