use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use tally_core::{
    Invoice, InvoiceDraft, InvoiceId, InvoiceStore, InvoiceStoreError, NewInvoice,
};

#[derive(Default, Clone)]
pub struct HashMapInvoiceStore {
    invoices: Arc<RwLock<HashMap<InvoiceId, Invoice>>>,
}

impl HashMapInvoiceStore {
    pub fn new() -> Self {
        Self {
            invoices: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl InvoiceStore for HashMapInvoiceStore {
    async fn insert_invoice(&self, invoice: &NewInvoice) -> Result<(), InvoiceStoreError> {
        let id = InvoiceId::new();
        let draft = &invoice.draft;
        self.invoices.write().await.insert(
            id,
            Invoice {
                id,
                customer_id: draft.customer_id().clone(),
                amount: draft.amount(),
                status: draft.status(),
                date: invoice.date,
            },
        );
        Ok(())
    }

    async fn update_invoice(
        &self,
        id: &InvoiceId,
        draft: &InvoiceDraft,
    ) -> Result<u64, InvoiceStoreError> {
        let mut invoices = self.invoices.write().await;
        let Some(invoice) = invoices.get_mut(id) else {
            return Ok(0);
        };
        invoice.customer_id = draft.customer_id().clone();
        invoice.amount = draft.amount();
        invoice.status = draft.status();
        Ok(1)
    }

    async fn delete_invoice(&self, id: &InvoiceId) -> Result<u64, InvoiceStoreError> {
        let removed = self.invoices.write().await.remove(id);
        Ok(u64::from(removed.is_some()))
    }

    async fn fetch_invoices(&self) -> Result<Vec<Invoice>, InvoiceStoreError> {
        let mut invoices: Vec<Invoice> = self.invoices.read().await.values().cloned().collect();
        invoices.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(invoices)
    }
}
