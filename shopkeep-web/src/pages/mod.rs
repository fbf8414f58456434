pub mod appointments;
pub mod customers;
pub mod dashboard;
pub mod error;
pub mod inventory;
pub mod invoices;
pub mod login;
pub mod settings;
pub mod suppliers;
