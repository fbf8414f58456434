use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, State},
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::{
    app_state::AppState,
    http::error::{ApiError, AppResult},
    middleware::auth::{CurrentSession, extract_session_cookie},
};
use serde_json::json;
use shared::models::{AuthenticatedUser, LoginRequest, LoginResponse};

fn apply_cookie(response: &mut Response, cookie: &cookie::Cookie<'static>) {
    if let Ok(value) = HeaderValue::from_str(&cookie.to_string()) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
}

/// Authenticate with username/password and receive a session cookie.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 422, description = "Username or password missing")
    ),
    tag = "Auth"
)]
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Response> {
    if payload.username.trim().is_empty() || payload.password.trim().is_empty() {
        return Err(ApiError::unprocessable(
            "username and password are required",
        ));
    }

    let (user, bundle) = match state
        .sessions
        .authenticate(payload.username.trim(), &payload.password)
        .await
    {
        Ok(pair) => {
            metrics::counter!("login_attempts_total", "status" => "ok").increment(1);
            pair
        }
        Err(err) => {
            metrics::counter!("login_attempts_total", "status" => "error").increment(1);
            return Err(err.into());
        }
    };

    let mut response = Json(LoginResponse { user }).into_response();
    apply_cookie(&mut response, &bundle.session_cookie);
    Ok(response)
}

/// The current authenticated user, per the validated session cookie.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = AuthenticatedUser),
        (status = 401, description = "No live session")
    ),
    tag = "Auth"
)]
#[instrument(skip(session))]
pub async fn me(
    Extension(session): Extension<CurrentSession>,
) -> AppResult<Json<AuthenticatedUser>> {
    Ok(Json(session.user))
}

/// Revoke the current session and clear the cookie.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session revoked"),
        (status = 401, description = "No session cookie present")
    ),
    tag = "Auth"
)]
#[instrument(skip(state, headers))]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let token = extract_session_cookie(&headers, state.sessions.cookie_name())
        .ok_or_else(|| ApiError::unauthorized("session cookie missing"))?;

    state.sessions.revoke(&token).await?;

    let mut response = Json(json!({ "ok": true })).into_response();
    apply_cookie(&mut response, &state.sessions.clear_cookie());
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app_state::testing::test_state, middleware::auth::auth_middleware};
    use axum::{
        Router, middleware,
        routing::{get, post},
    };
    use axum_test::TestServer;
    use http::StatusCode;
    use shared::models::Role;

    fn auth_app() -> TestServer {
        let state = test_state();
        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/logout", post(logout))
            .route(
                "/api/auth/me",
                get(me).route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
            )
            .with_state(state);
        TestServer::new(app).expect("test server")
    }

    #[tokio::test]
    async fn login_with_default_admin_credentials_sets_cookie() {
        let server = auth_app();
        let response = server
            .post("/api/auth/login")
            .json(&LoginRequest {
                username: "admin".into(),
                password: "12345678".into(),
            })
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let body: LoginResponse = response.json();
        assert_eq!(body.user.username, "admin");
        assert_eq!(body.user.role, Role::Administrator);

        let cookies = response.cookies();
        let session = cookies
            .iter()
            .find(|cookie| cookie.name() == "SHOPKEEP_SESSION")
            .expect("session cookie");
        assert!(!session.value().is_empty());
    }

    #[tokio::test]
    async fn login_with_wrong_credentials_is_unauthorized() {
        let server = auth_app();
        let response = server
            .post("/api/auth/login")
            .json(&LoginRequest {
                username: "admin".into(),
                password: "wrong-password".into(),
            })
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        assert!(response.cookies().iter().next().is_none(), "no cookie on failure");

        let payload: serde_json::Value = response.json();
        assert_eq!(payload["code"], "SHK.AUTH.INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn login_with_empty_fields_is_unprocessable() {
        let server = auth_app();
        let response = server
            .post("/api/auth/login")
            .json(&LoginRequest {
                username: "".into(),
                password: "".into(),
            })
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn me_reflects_the_logged_in_user() {
        let server = auth_app();
        let login_response = server
            .post("/api/auth/login")
            .json(&LoginRequest {
                username: "staff".into(),
                password: "staff1234".into(),
            })
            .await;
        let session = login_response
            .cookies()
            .iter()
            .find(|cookie| cookie.name() == "SHOPKEEP_SESSION")
            .expect("session cookie")
            .value()
            .to_string();

        let response = server
            .get("/api/auth/me")
            .add_header(
                header::COOKIE,
                format!("SHOPKEEP_SESSION={session}"),
            )
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let user: AuthenticatedUser = response.json();
        assert_eq!(user.username, "staff");
        assert_eq!(user.role, Role::Staff);
    }

    #[tokio::test]
    async fn me_without_cookie_is_unauthorized() {
        let server = auth_app();
        let response = server.get("/api/auth/me").await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn logout_revokes_the_session() {
        let server = auth_app();
        let login_response = server
            .post("/api/auth/login")
            .json(&LoginRequest {
                username: "admin".into(),
                password: "12345678".into(),
            })
            .await;
        let session = login_response
            .cookies()
            .iter()
            .find(|cookie| cookie.name() == "SHOPKEEP_SESSION")
            .expect("session cookie")
            .value()
            .to_string();
        let cookie_header = format!("SHOPKEEP_SESSION={session}");

        let logout_response = server
            .post("/api/auth/logout")
            .add_header(header::COOKIE, cookie_header.clone())
            .await;
        assert_eq!(logout_response.status_code(), StatusCode::OK);

        // The revoked session no longer authenticates.
        let me_response = server
            .get("/api/auth/me")
            .add_header(header::COOKIE, cookie_header)
            .await;
        assert_eq!(me_response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn logout_without_cookie_is_unauthorized() {
        let server = auth_app();
        let response = server.post("/api/auth/logout").await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }
}
