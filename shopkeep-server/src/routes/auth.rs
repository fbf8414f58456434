use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tracing::info;

use crate::{
    app_state::AppState,
    handlers::auth::{login, logout, me},
    middleware::auth::auth_middleware,
};

/// Register the auth routes.
///
/// `/auth/me` sits behind the session middleware; login and logout manage
/// the cookie themselves and stay public.
pub fn create_router_auth(state: Arc<AppState>) -> Router<Arc<AppState>> {
    info!("Creating auth router");
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route(
            "/auth/me",
            get(me).route_layer(middleware::from_fn_with_state(state, auth_middleware)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::testing::test_state;

    #[test]
    fn auth_router_has_routes() {
        let router = create_router_auth(test_state());
        assert!(router.has_routes(), "Router should not be empty");
    }
}
