use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{app_state::AppState, openapi::ApiDoc};

pub fn openapi_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/openapi/shopkeep.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::testing::test_state;
    use axum_test::TestServer;
    use http::StatusCode;

    #[tokio::test]
    async fn openapi_document_is_served() {
        let app = openapi_routes().with_state(test_state());
        let server = TestServer::new(app).expect("test server");

        let response = server.get("/openapi/shopkeep.json").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let document: serde_json::Value = response.json();
        assert_eq!(document["info"]["title"], "ShopKeep API");
        assert!(
            document["paths"]
                .as_object()
                .is_some_and(|paths| paths.contains_key("/api/auth/login")),
            "login path should be documented"
        );
    }
}
