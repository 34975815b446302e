use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use tally_core::{
    Amount, CustomerId, Invoice, InvoiceDraft, InvoiceId, InvoiceStatus, InvoiceStore,
    InvoiceStoreError, NewInvoice,
};
use uuid::Uuid;

use super::is_unavailable;

#[derive(Clone)]
pub struct PostgresInvoiceStore {
    pool: PgPool,
}

impl PostgresInvoiceStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresInvoiceStore { pool }
    }
}

#[derive(FromRow)]
struct InvoiceRow {
    id: Uuid,
    customer_id: String,
    amount: i32,
    status: String,
    date: NaiveDate,
}

impl TryFrom<InvoiceRow> for Invoice {
    type Error = InvoiceStoreError;

    fn try_from(row: InvoiceRow) -> Result<Self, Self::Error> {
        let corrupt = |e: &dyn std::fmt::Display| {
            InvoiceStoreError::QueryFailed(format!("invoice {}: {e}", row.id))
        };
        Ok(Invoice {
            id: InvoiceId::from(row.id),
            customer_id: CustomerId::parse(Some(&row.customer_id)).map_err(|e| corrupt(&e))?,
            amount: Amount::from_cents(i64::from(row.amount)).map_err(|e| corrupt(&e))?,
            status: row
                .status
                .parse::<InvoiceStatus>()
                .map_err(|e| corrupt(&e))?,
            date: row.date,
        })
    }
}

fn map_error(error: sqlx::Error) -> InvoiceStoreError {
    if is_unavailable(&error) {
        InvoiceStoreError::Unavailable(error.to_string())
    } else {
        InvoiceStoreError::QueryFailed(error.to_string())
    }
}

fn amount_column(amount: Amount) -> Result<i32, InvoiceStoreError> {
    i32::try_from(amount.cents()).map_err(|e| InvoiceStoreError::QueryFailed(e.to_string()))
}

#[async_trait::async_trait]
impl InvoiceStore for PostgresInvoiceStore {
    #[tracing::instrument(name = "Inserting invoice into PostgreSQL", skip_all)]
    async fn insert_invoice(&self, invoice: &NewInvoice) -> Result<(), InvoiceStoreError> {
        let draft = &invoice.draft;
        sqlx::query(
            r#"
                INSERT INTO invoices (customer_id, amount, status, date)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(draft.customer_id().as_str())
        .bind(amount_column(draft.amount())?)
        .bind(draft.status().as_str())
        .bind(invoice.date)
        .execute(&self.pool)
        .await
        .map_err(map_error)?;

        Ok(())
    }

    #[tracing::instrument(name = "Updating invoice in PostgreSQL", skip(self, draft))]
    async fn update_invoice(
        &self,
        id: &InvoiceId,
        draft: &InvoiceDraft,
    ) -> Result<u64, InvoiceStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE invoices
                SET customer_id = $1, amount = $2, status = $3
                WHERE id = $4
            "#,
        )
        .bind(draft.customer_id().as_str())
        .bind(amount_column(draft.amount())?)
        .bind(draft.status().as_str())
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_error)?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(name = "Deleting invoice from PostgreSQL", skip(self))]
    async fn delete_invoice(&self, id: &InvoiceId) -> Result<u64, InvoiceStoreError> {
        let result = sqlx::query(
            r#"
                DELETE FROM invoices
                WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_error)?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(name = "Fetching invoices from PostgreSQL", skip_all)]
    async fn fetch_invoices(&self) -> Result<Vec<Invoice>, InvoiceStoreError> {
        let rows = sqlx::query_as::<_, InvoiceRow>(
            r#"
                SELECT id, customer_id, amount, status, date
                FROM invoices
                ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter().map(Invoice::try_from).collect()
    }
}
