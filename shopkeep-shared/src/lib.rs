//! Shared models, configuration, and utilities for the ShopKeep platform.
//!
//! Everything in this crate is consumed by both the backend server and the
//! WASM dashboard, so it stays free of server-only dependencies.

pub mod config;
pub mod models;
