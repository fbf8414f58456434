pub mod store;
pub mod whatsapp;
