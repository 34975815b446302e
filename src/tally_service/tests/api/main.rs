mod helpers;
mod invoices;
mod login;
mod postgres;
