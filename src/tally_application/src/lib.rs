pub mod use_cases;

pub use use_cases::{
    authenticate::{AuthError, AuthenticateUseCase},
    execute_mutation::{DeletePolicy, Mutation, MutationExecutor, MutationFault},
    invoice_actions::{ActionResult, InvoiceActions},
    list_invoices::ListInvoicesUseCase,
};
