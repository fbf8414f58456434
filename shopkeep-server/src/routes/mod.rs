pub mod auth;
pub mod health;
pub mod openapi;
pub mod records;
pub mod theme;
