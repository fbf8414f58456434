use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{self, header},
    middleware::Next,
    response::Response,
};
use cookie::Cookie;
use shared::models::AuthenticatedUser;
use tracing::instrument;

use crate::{app_state::AppState, http::error::ApiError};

/// The validated session attached to a request by [`auth_middleware`].
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub token: String,
    pub user: AuthenticatedUser,
}

/// Middleware gating protected routes on a server-verified session cookie.
///
/// The session is re-validated on every request; there is no client-trusted
/// shortcut on this side.
#[instrument(skip(state, req, next))]
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_session_cookie(req.headers(), state.sessions.cookie_name())
        .ok_or_else(|| ApiError::unauthorized("session cookie missing"))?;

    let user = state
        .sessions
        .validate(&token)
        .await?
        .ok_or_else(|| ApiError::unauthorized("session not found"))?;

    req.extensions_mut().insert(CurrentSession { token, user });
    Ok(next.run(req).await)
}

pub fn extract_session_cookie(headers: &http::HeaderMap, name: &str) -> Option<String> {
    let value = headers.get(header::COOKIE)?.to_str().ok()?;
    Cookie::split_parse(value)
        .flatten()
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue};

    #[test]
    fn extract_session_cookie_reads_specific_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; SHOPKEEP_SESSION=token123"),
        );
        let value = extract_session_cookie(&headers, "SHOPKEEP_SESSION");
        assert_eq!(value.as_deref(), Some("token123"));
    }

    #[test]
    fn extract_session_cookie_handles_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_session_cookie(&headers, "SHOPKEEP_SESSION"), None);
    }
}
