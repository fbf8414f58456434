use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Serialize)]
struct HealthResponse<'a> {
    status: &'a str,
}

async fn healthz() -> impl IntoResponse {
    metrics::counter!("health_checks_total", "endpoint" => "healthz", "status" => "ok")
        .increment(1);
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}

// The record store is in-process, so readiness only tracks that the router
// is serving.
async fn readyz() -> impl IntoResponse {
    metrics::counter!("health_checks_total", "endpoint" => "readyz", "status" => "ok")
        .increment(1);
    (StatusCode::OK, Json(HealthResponse { status: "ready" }))
}

pub fn create_health_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::testing::test_state;
    use axum_test::TestServer;

    #[tokio::test]
    async fn healthz_returns_ok() {
        let _ = crate::server::metrics_handle();
        let app = create_health_router().with_state(test_state());
        let server = TestServer::new(app).expect("test server");

        let response = server.get("/healthz").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readyz_reports_ready() {
        let _ = crate::server::metrics_handle();
        let app = create_health_router().with_state(test_state());
        let server = TestServer::new(app).expect("test server");

        let response = server.get("/readyz").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ready");
    }
}
