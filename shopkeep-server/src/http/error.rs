use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use super::problem::ProblemDetails;
use crate::{auth::session::SessionError, services::whatsapp::ReminderError};

pub type AppResult<T> = Result<T, ApiError>;

/// API-facing error carrying the status, stable code, and message of the
/// problem+json body it renders to.
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
    details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "unauthorized", message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, "forbidden", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "invalid_request",
            message,
        )
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, "upstream_failed", message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
    }

    #[allow(dead_code)]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let details = self.details;

        let mut problem = ProblemDetails::new(self.status, self.code, self.message);
        if let Some(details) = details {
            problem = problem.with_details(details);
        }

        problem.into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(value: anyhow::Error) -> Self {
        Self::internal_server_error(value.to_string())
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidCredentials => Self::new(
                StatusCode::UNAUTHORIZED,
                "SHK.AUTH.INVALID_CREDENTIALS",
                "invalid credentials",
            ),
            SessionError::SessionExpired => Self::new(
                StatusCode::UNAUTHORIZED,
                "SHK.AUTH.EXPIRED",
                "session expired",
            ),
            other => Self::internal_server_error(other.to_string()),
        }
    }
}

impl From<ReminderError> for ApiError {
    fn from(err: ReminderError) -> Self {
        match err {
            ReminderError::MissingCredentials => Self::new(
                StatusCode::BAD_GATEWAY,
                "SHK.REMINDER.UNCONFIGURED",
                "reminder provider credentials are not configured",
            ),
            other => Self::bad_gateway(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http::header::CONTENT_TYPE;
    use serde_json::{Value, json};

    #[test]
    fn new_sets_fields_and_allows_details() {
        let error = ApiError::forbidden("nope").with_details(json!({ "reason": "policy" }));
        assert_eq!(error.status, StatusCode::FORBIDDEN);
        assert_eq!(error.code, "forbidden");
        assert!(
            error
                .details
                .as_ref()
                .is_some_and(|details| details["reason"] == Value::from("policy"))
        );
    }

    #[tokio::test]
    async fn into_response_serializes_problem_details() {
        let response = ApiError::not_found("missing resource")
            .with_details(json!({ "resource": "thing" }))
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/problem+json"
        );

        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("body to bytes");
        let json: Value =
            serde_json::from_slice(&bytes).expect("problem details deserializes to json");
        assert_eq!(json["code"], "not_found");
        assert_eq!(json["message"], "missing resource");
        assert_eq!(json["details"]["resource"], "thing");
    }

    #[test]
    fn session_errors_map_to_matching_status_codes() {
        let unauthorized = ApiError::from(SessionError::InvalidCredentials);
        assert_eq!(unauthorized.status, StatusCode::UNAUTHORIZED);
        assert_eq!(unauthorized.code, "SHK.AUTH.INVALID_CREDENTIALS");

        let expired = ApiError::from(SessionError::SessionExpired);
        assert_eq!(expired.status, StatusCode::UNAUTHORIZED);

        let internal = ApiError::from(SessionError::PasswordHash("boom".into()));
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn reminder_errors_map_to_bad_gateway() {
        let unconfigured = ApiError::from(ReminderError::MissingCredentials);
        assert_eq!(unconfigured.status, StatusCode::BAD_GATEWAY);
        assert_eq!(unconfigured.code, "SHK.REMINDER.UNCONFIGURED");

        let api = ApiError::from(ReminderError::Api {
            status: 400,
            body: "bad payload".into(),
        });
        assert_eq!(api.status, StatusCode::BAD_GATEWAY);
    }
}
