use std::sync::Arc;

use axum::{Router, routing::get};
use tracing::info;

use crate::{app_state::AppState, handlers::theme::get_theme};

/// Register the theme route. Served without a session so the login page can
/// paint with the configured palette.
pub fn create_router_theme() -> Router<Arc<AppState>> {
    info!("Creating theme router");
    Router::new().route("/theme", get(get_theme))
}
