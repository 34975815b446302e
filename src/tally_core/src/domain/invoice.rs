use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Largest amount, in cents, the `invoices.amount` column can hold.
pub const MAX_AMOUNT_CENTS: i64 = i32::MAX as i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(Uuid);

impl InvoiceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for InvoiceId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for InvoiceId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for InvoiceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque reference to the customer an invoice is billed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Please select a customer.")]
pub struct CustomerIdError;

impl CustomerId {
    pub fn parse(raw: Option<&str>) -> Result<Self, CustomerIdError> {
        match raw.map(str::trim) {
            Some(id) if !id.is_empty() => Ok(Self(id.to_owned())),
            _ => Err(CustomerIdError),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A strictly positive amount of money, held in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount must be a number.")]
    NotANumber,
    #[error("Amount must be greater than $0.")]
    NotPositive,
    #[error("Amount is too large.")]
    TooLarge,
}

impl Amount {
    /// Coerces a raw form value into cents.
    ///
    /// A missing or blank value coerces to zero, which then fails the
    /// positivity check. The value is scaled by 100 and rounded half away from
    /// zero, so the result is exact for inputs with at most two decimal
    /// digits. Anything finer is rounded to the nearest cent, and an input that
    /// rounds to zero cents counts as not positive.
    pub fn parse(raw: Option<&str>) -> Result<Self, AmountError> {
        let trimmed = raw.unwrap_or_default().trim();
        let value = if trimmed.is_empty() {
            0.0
        } else {
            trimmed
                .parse::<f64>()
                .map_err(|_| AmountError::NotANumber)?
        };

        if !value.is_finite() {
            return Err(AmountError::NotANumber);
        }

        Self::from_dollars(value)
    }

    fn from_dollars(value: f64) -> Result<Self, AmountError> {
        let cents = (value * 100.0).round();
        if cents < 1.0 {
            return Err(AmountError::NotPositive);
        }
        if cents > MAX_AMOUNT_CENTS as f64 {
            return Err(AmountError::TooLarge);
        }
        Ok(Self(cents as i64))
    }

    pub fn from_cents(cents: i64) -> Result<Self, AmountError> {
        match cents {
            c if c < 1 => Err(AmountError::NotPositive),
            c if c > MAX_AMOUNT_CENTS => Err(AmountError::TooLarge),
            c => Ok(Self(c)),
        }
    }

    pub fn cents(&self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Please select a status.")]
pub struct InvoiceStatusError;

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl FromStr for InvoiceStatus {
    type Err = InvoiceStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            _ => Err(InvoiceStatusError),
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The caller-supplied part of an invoice, after validation.
///
/// Neither the id nor the date are part of it: the id comes from the request
/// path and the date is assigned when the invoice is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    customer_id: CustomerId,
    amount: Amount,
    status: InvoiceStatus,
}

impl InvoiceDraft {
    pub fn new(customer_id: CustomerId, amount: Amount, status: InvoiceStatus) -> Self {
        Self {
            customer_id,
            amount,
            status,
        }
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }
}

/// A draft stamped with its creation date, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
    pub draft: InvoiceDraft,
    pub date: NaiveDate,
}

/// A stored invoice, as listed on the invoices page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub amount: Amount,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}
