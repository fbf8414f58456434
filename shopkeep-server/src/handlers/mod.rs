pub mod auth;
pub mod records;
pub mod reminders;
pub mod theme;
