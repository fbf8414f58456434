//! Session issuance and validation.
//!
//! Sessions are opaque random tokens carried in an `HttpOnly` cookie and
//! checked server-side on every protected request. The store is in-memory;
//! durable persistence is an external concern for this system.

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use argon2::password_hash::rand_core::OsRng;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use cookie::{Cookie, SameSite};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, warn};
use uuid::Uuid;

use shared::{
    config::server::SessionConfig,
    models::{AuthenticatedUser, Role},
};

/// Errors produced by the session subsystem.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
    #[error("password verification failed")]
    InvalidCredentials,
    #[error("session expired")]
    SessionExpired,
    #[error("time conversion error: {0}")]
    TimeConversion(String),
}

/// Session issuance output containing the raw token and encoded cookie.
#[derive(Debug, Clone)]
pub struct SessionBundle {
    pub token: String,
    pub session_cookie: Cookie<'static>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Session operations the handlers and middleware depend on.
///
/// A trait seam so handler tests can substitute a scripted store.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Verify credentials and issue a new session.
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(AuthenticatedUser, SessionBundle), SessionError>;

    /// Resolve a token to its user, if the session is live.
    async fn validate(&self, token: &str) -> Result<Option<AuthenticatedUser>, SessionError>;

    /// Revoke a session by its token. Revoking an unknown token is a no-op.
    async fn revoke(&self, token: &str) -> Result<(), SessionError>;

    /// Name of the cookie sessions travel in.
    fn cookie_name(&self) -> &str;

    /// A cookie that clears the session on the client.
    fn clear_cookie(&self) -> Cookie<'static>;
}

struct SeededUser {
    user: AuthenticatedUser,
    password_hash: String,
}

struct LiveSession {
    user: AuthenticatedUser,
    expires_at: DateTime<Utc>,
}

/// In-memory [`SessionStore`] seeded with the bootstrap accounts from
/// configuration.
pub struct MemorySessionStore {
    cookie_name: String,
    ttl: Duration,
    users: Vec<SeededUser>,
    sessions: Mutex<HashMap<String, LiveSession>>,
}

impl MemorySessionStore {
    /// Build the store, hashing the seeded account passwords.
    ///
    /// # Errors
    /// Fails when password hashing fails.
    pub fn from_config(config: &SessionConfig) -> Result<Self, SessionError> {
        let users = vec![
            Self::seed_user(&config.admin_username, &config.admin_password, Role::Administrator)?,
            Self::seed_user(&config.staff_username, &config.staff_password, Role::Staff)?,
        ];

        Ok(Self {
            cookie_name: config.cookie_name.clone(),
            ttl: Duration::minutes(config.ttl_minutes),
            users,
            sessions: Mutex::new(HashMap::new()),
        })
    }

    fn seed_user(username: &str, password: &str, role: Role) -> Result<SeededUser, SessionError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| SessionError::PasswordHash(err.to_string()))?
            .to_string();

        Ok(SeededUser {
            user: AuthenticatedUser {
                id: Uuid::new_v4(),
                username: username.to_string(),
                role,
            },
            password_hash,
        })
    }

    fn generate_token() -> String {
        let bytes: [u8; 32] = rand::random();
        URL_SAFE_NO_PAD.encode(bytes)
    }

    fn build_cookie(
        &self,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Cookie<'static>, SessionError> {
        let expires_utc = OffsetDateTime::from_unix_timestamp(expires_at.timestamp())
            .map_err(|err| SessionError::TimeConversion(err.to_string()))?;

        Ok(Cookie::build((self.cookie_name.clone(), token.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .expires(expires_utc)
            .build())
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(AuthenticatedUser, SessionBundle), SessionError> {
        let seeded = self
            .users
            .iter()
            .find(|candidate| candidate.user.username == username)
            .ok_or(SessionError::InvalidCredentials)?;

        let parsed = PasswordHash::new(&seeded.password_hash)
            .map_err(|err| SessionError::PasswordHash(err.to_string()))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| SessionError::InvalidCredentials)?;

        let token = Self::generate_token();
        let issued_at = Utc::now();
        let expires_at = issued_at + self.ttl;
        let session_cookie = self.build_cookie(&token, expires_at)?;

        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                token.clone(),
                LiveSession {
                    user: seeded.user.clone(),
                    expires_at,
                },
            );

        debug!(username, "issued session");
        Ok((
            seeded.user.clone(),
            SessionBundle {
                token,
                session_cookie,
                issued_at,
                expires_at,
            },
        ))
    }

    async fn validate(&self, token: &str) -> Result<Option<AuthenticatedUser>, SessionError> {
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match sessions.get(token) {
            Some(session) if session.expires_at > Utc::now() => Ok(Some(session.user.clone())),
            Some(_) => {
                sessions.remove(token);
                warn!("rejected expired session");
                Err(SessionError::SessionExpired)
            }
            None => Ok(None),
        }
    }

    async fn revoke(&self, token: &str) -> Result<(), SessionError> {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token);
        Ok(())
    }

    fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    fn clear_cookie(&self) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), String::new()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(0))
            .expires(OffsetDateTime::UNIX_EPOCH)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> MemorySessionStore {
        MemorySessionStore::from_config(&SessionConfig::default()).expect("store builds")
    }

    #[tokio::test]
    async fn authenticate_issues_validatable_session() {
        let store = test_store();
        let (user, bundle) = store
            .authenticate("admin", "12345678")
            .await
            .expect("default admin credentials authenticate");

        assert_eq!(user.username, "admin");
        assert_eq!(user.role, Role::Administrator);
        assert_eq!(bundle.session_cookie.name(), "SHOPKEEP_SESSION");
        assert!(bundle.session_cookie.http_only().unwrap());

        let resolved = store.validate(&bundle.token).await.unwrap();
        assert_eq!(resolved, Some(user));
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let store = test_store();
        let result = store.authenticate("admin", "wrong-password").await;
        assert!(matches!(result, Err(SessionError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn unknown_user_is_rejected() {
        let store = test_store();
        let result = store.authenticate("ghost", "12345678").await;
        assert!(matches!(result, Err(SessionError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn staff_account_has_staff_role() {
        let store = test_store();
        let (user, _) = store.authenticate("staff", "staff1234").await.unwrap();
        assert_eq!(user.role, Role::Staff);
    }

    #[tokio::test]
    async fn unknown_token_validates_to_none() {
        let store = test_store();
        assert_eq!(store.validate("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn revoked_session_no_longer_validates() {
        let store = test_store();
        let (_, bundle) = store.authenticate("admin", "12345678").await.unwrap();

        store.revoke(&bundle.token).await.unwrap();
        assert_eq!(store.validate(&bundle.token).await.unwrap(), None);
    }

    #[tokio::test]
    async fn expired_session_is_evicted() {
        let config = SessionConfig {
            ttl_minutes: -1, // already expired at issuance
            ..SessionConfig::default()
        };
        let store = MemorySessionStore::from_config(&config).unwrap();
        let (_, bundle) = store.authenticate("admin", "12345678").await.unwrap();

        let result = store.validate(&bundle.token).await;
        assert!(matches!(result, Err(SessionError::SessionExpired)));
        // Eviction: the second lookup no longer finds the token at all.
        assert_eq!(store.validate(&bundle.token).await.unwrap(), None);
    }

    #[test]
    fn tokens_are_unique_and_url_safe() {
        let first = MemorySessionStore::generate_token();
        let second = MemorySessionStore::generate_token();
        assert_ne!(first, second);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let store = test_store();
        let cookie = store.clear_cookie();
        assert_eq!(cookie.name(), "SHOPKEEP_SESSION");
        assert!(cookie.value().is_empty());
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(0)));
    }
}
