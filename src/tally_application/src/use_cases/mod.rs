pub mod authenticate;
pub mod execute_mutation;
pub mod invoice_actions;
pub mod list_invoices;
