//! # Configuration
//!
//! Server-side configuration structures and loading. Not compiled for the
//! WASM dashboard, which receives everything it needs over the API.

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
