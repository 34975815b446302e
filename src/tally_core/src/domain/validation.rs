use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use super::invoice::{Amount, CustomerId, InvoiceDraft, InvoiceStatus, InvoiceStatusError};

/// Raw invoice fields as they arrive from a form post.
///
/// Every field is optional because a browser may leave any of them out.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceForm {
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InvoiceField {
    CustomerId,
    Amount,
    Status,
}

impl InvoiceField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CustomerId => "customerId",
            Self::Amount => "amount",
            Self::Status => "status",
        }
    }
}

/// A single failed field, as reported by [`InvoiceForm::validate_strict`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field:?}: {message}")]
pub struct FieldError {
    pub field: InvoiceField,
    pub message: String,
}

/// Messages per field, in form order. Serialized as a map keyed by the
/// field's form name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<InvoiceField, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: InvoiceField, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: InvoiceField) -> Option<&[String]> {
        self.0.get(&field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|(field, messages)| (field.as_str(), messages)),
        )
    }
}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        let mut errors = Self::default();
        errors.push(error.field, error.message);
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(InvoiceDraft),
    Invalid(FieldErrors),
}

impl InvoiceForm {
    /// Checks every field and reports all failures at once.
    ///
    /// Nothing from a partially valid form is kept: the draft is only built
    /// when all three fields pass.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = FieldErrors::default();

        let customer_id = CustomerId::parse(self.customer_id.as_deref())
            .map_err(|e| errors.push(InvoiceField::CustomerId, e.to_string()))
            .ok();
        let amount = Amount::parse(self.amount.as_deref())
            .map_err(|e| errors.push(InvoiceField::Amount, e.to_string()))
            .ok();
        let status = self
            .parse_status()
            .map_err(|e| errors.push(e.field, e.message))
            .ok();

        match (customer_id, amount, status) {
            (Some(customer_id), Some(amount), Some(status)) if errors.is_empty() => {
                ValidationResult::Valid(InvoiceDraft::new(customer_id, amount, status))
            }
            _ => ValidationResult::Invalid(errors),
        }
    }

    /// Checks fields in order and stops at the first failure.
    pub fn validate_strict(&self) -> Result<InvoiceDraft, FieldError> {
        let customer_id =
            CustomerId::parse(self.customer_id.as_deref()).map_err(|e| FieldError {
                field: InvoiceField::CustomerId,
                message: e.to_string(),
            })?;
        let amount = Amount::parse(self.amount.as_deref()).map_err(|e| FieldError {
            field: InvoiceField::Amount,
            message: e.to_string(),
        })?;
        let status = self.parse_status()?;

        Ok(InvoiceDraft::new(customer_id, amount, status))
    }

    fn parse_status(&self) -> Result<InvoiceStatus, FieldError> {
        self.status
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(|e: InvoiceStatusError| FieldError {
                field: InvoiceField::Status,
                message: e.to_string(),
            })
    }
}
