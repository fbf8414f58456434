use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::instrument;

use crate::{app_state::AppState, http::error::AppResult};
use shared::models::ThemeSettings;

/// Visual settings for the dashboard.
///
/// Served unauthenticated so the login view is already themed.
#[utoipa::path(
    get,
    path = "/api/theme",
    responses((status = 200, description = "Theme settings", body = ThemeSettings)),
    tag = "Theme"
)]
#[instrument(skip(state))]
pub async fn get_theme(State(state): State<Arc<AppState>>) -> AppResult<Json<ThemeSettings>> {
    Ok(Json(state.config.theme.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::testing::test_state;
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use http::StatusCode;

    #[tokio::test]
    async fn theme_is_served_without_authentication() {
        let app = Router::new()
            .route("/api/theme", get(get_theme))
            .with_state(test_state());
        let server = TestServer::new(app).expect("test server");

        let response = server.get("/api/theme").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let theme: ThemeSettings = response.json();
        assert_eq!(theme, ThemeSettings::default());
    }
}
