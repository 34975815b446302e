pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    invoice::{
        Amount, AmountError, CustomerId, CustomerIdError, Invoice, InvoiceDraft, InvoiceId,
        InvoiceStatus, InvoiceStatusError, MAX_AMOUNT_CENTS, NewInvoice,
    },
    outcome::{FormState, MutationOutcome, Redirect},
    password::{HashedPassword, MIN_PASSWORD_LENGTH, Password},
    user::{AuthenticatedUser, Credentials, UserError, UserRecord},
    validation::{FieldError, FieldErrors, InvoiceField, InvoiceForm, ValidationResult},
};

pub use ports::{
    repositories::{InvoiceStore, InvoiceStoreError, UserStore, UserStoreError},
    services::{PasswordHashError, PasswordHashing, PathRevalidator},
};
