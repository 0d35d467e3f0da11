//! Admin authentication.
//!
//! The admin password is stored as an Argon2 PHC string in the data file.
//! A successful login issues a random session token, kept in memory with an
//! expiry and handed to the browser as an `HttpOnly` cookie. Sessions end on
//! logout or when they expire; a server restart drops them all.

use argon2::password_hash::{
    rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier,
    SaltString,
};
use argon2::Argon2;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use rand::Rng;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use super::AppState;
use crate::models::Admin;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "portfolio_session";

/// Default session lifetime.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Errors that can occur while hashing a password.
#[derive(Debug)]
pub enum AuthError {
    HashError(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::HashError(e) => write!(f, "Failed to hash password: {}", e),
        }
    }
}

impl std::error::Error for AuthError {}

/// Hashes a password into a salted Argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::HashError(e.to_string()))
}

/// Checks a login attempt against the stored admin record.
///
/// The username must match exactly and the password must verify against the
/// stored hash. An empty or malformed stored hash never verifies.
pub fn verify_credentials(username: &str, password: &str, admin: &Admin) -> bool {
    if admin.username.is_empty() || username != admin.username {
        return false;
    }

    let parsed = match PasswordHash::new(&admin.password_hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Stored admin password hash is invalid: {}", e);
            return false;
        }
    };

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => true,
        Err(PasswordHashError::Password) => false,
        Err(e) => {
            tracing::warn!("Failed to verify admin password: {}", e);
            false
        }
    }
}

/// Data kept for an active session.
#[derive(Debug, Clone)]
pub struct SessionData {
    /// When the session was created.
    pub created_at: Instant,
    /// When the session expires.
    pub expires_at: Instant,
}

/// In-memory admin session store with expiry.
///
/// Thread-safe via internal RwLock.
#[derive(Debug)]
pub struct SessionStore {
    /// Sessions indexed by token string.
    sessions: RwLock<HashMap<String, SessionData>>,
    /// Lifetime of new sessions.
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Lifetime of new sessions.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Starts a new session and returns its token.
    pub fn create_session(&self) -> String {
        self.create_session_with_ttl(self.ttl)
    }

    /// Starts a session with a custom lifetime.
    pub fn create_session_with_ttl(&self, ttl: Duration) -> String {
        let token = generate_token();
        let now = Instant::now();

        let data = SessionData {
            created_at: now,
            expires_at: now + ttl,
        };

        let mut sessions = self.sessions.write().unwrap();
        sessions.insert(token.clone(), data);

        token
    }

    /// Returns true if `token` names a session that has not expired.
    pub fn is_active(&self, token: &str) -> bool {
        let sessions = self.sessions.read().unwrap();
        sessions
            .get(token)
            .is_some_and(|data| Instant::now() < data.expires_at)
    }

    /// Ends a session. Returns false if the token was unknown.
    pub fn destroy(&self, token: &str) -> bool {
        let mut sessions = self.sessions.write().unwrap();
        sessions.remove(token).is_some()
    }

    /// Removes all expired sessions.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_expired(&self) -> usize {
        let mut sessions = self.sessions.write().unwrap();
        let now = Instant::now();

        let before = sessions.len();
        sessions.retain(|_, data| data.expires_at > now);
        let after = sessions.len();

        before - after
    }

    /// Returns the number of sessions currently stored.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap().len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

/// Generates a secure random token.
///
/// Returns 32 random bytes encoded as base64url (no padding).
fn generate_token() -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

    let mut bytes = [0u8; 32];
    rand::rng().fill(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Extracts the session token from the request's `Cookie` headers.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, token)| token)
        .filter(|token| !token.is_empty())
}

/// Returns true if the request carries an active admin session.
pub fn is_authenticated(sessions: &SessionStore, headers: &HeaderMap) -> bool {
    session_token(headers).is_some_and(|token| sessions.is_active(token))
}

/// `Set-Cookie` value that stores `token` for `ttl`.
pub fn session_cookie(token: &str, ttl: Duration) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        ttl.as_secs()
    )
}

/// `Set-Cookie` value that removes the session cookie.
pub fn clear_session_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        SESSION_COOKIE
    )
}

/// Session of the authenticated admin, added to request extensions by
/// [`require_admin`].
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
}

/// Gate for admin routes: anonymous requests are redirected to the login page.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = session_token(request.headers())
        .filter(|token| state.sessions.is_active(token))
        .map(str::to_string);

    match token {
        Some(token) => {
            request.extensions_mut().insert(AdminSession { token });
            next.run(request).await
        }
        None => {
            tracing::debug!("Unauthenticated request to {}", request.uri().path());
            Redirect::to("/admin/login").into_response()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use argon2::{Algorithm, Params, Version};
    use axum::http::HeaderValue;
    use std::thread;

    /// Low-cost hash so tests stay fast. Verification reads the parameters
    /// back from the PHC string.
    pub(crate) fn cheap_hash(password: &str) -> String {
        let params = Params::new(1024, 1, 1, None).unwrap();
        let argon = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);
        argon
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    fn admin(username: &str, password: &str) -> Admin {
        Admin {
            username: username.to_string(),
            password_hash: cheap_hash(password),
        }
    }

    #[test]
    fn test_hash_password_verifies() {
        let hash = hash_password("hunter2").unwrap();
        assert!(hash.starts_with("$argon2"));

        let admin = Admin {
            username: "admin".to_string(),
            password_hash: hash,
        };
        assert!(verify_credentials("admin", "hunter2", &admin));
    }

    #[test]
    fn test_hash_password_is_salted() {
        assert_ne!(cheap_hash("same"), cheap_hash("same"));
    }

    #[test]
    fn test_verify_correct_credentials() {
        let admin = admin("admin", "secret");
        assert!(verify_credentials("admin", "secret", &admin));
    }

    #[test]
    fn test_verify_wrong_password() {
        let admin = admin("admin", "secret");
        assert!(!verify_credentials("admin", "wrong", &admin));
    }

    #[test]
    fn test_verify_wrong_username() {
        let admin = admin("admin", "secret");
        assert!(!verify_credentials("root", "secret", &admin));
        assert!(!verify_credentials("Admin", "secret", &admin));
        assert!(!verify_credentials("root", "wrong", &admin));
    }

    #[test]
    fn test_verify_against_empty_admin() {
        let admin = Admin::default();
        assert!(!verify_credentials("", "", &admin));
    }

    #[test]
    fn test_verify_malformed_hash() {
        let admin = Admin {
            username: "admin".to_string(),
            password_hash: "$2a$10$notargon".to_string(),
        };
        assert!(!verify_credentials("admin", "secret", &admin));
    }

    #[test]
    fn test_session_lifecycle() {
        let store = SessionStore::default();

        let token = store.create_session();
        assert_eq!(token.len(), 43); // 32 bytes base64url = 43 chars
        assert!(store.is_active(&token));

        assert!(store.destroy(&token));
        assert!(!store.is_active(&token));
        assert!(!store.destroy(&token));
    }

    #[test]
    fn test_unknown_session_inactive() {
        let store = SessionStore::default();
        assert!(!store.is_active("nonexistent-token"));
    }

    #[test]
    fn test_expired_session_inactive() {
        let store = SessionStore::default();

        let token = store.create_session_with_ttl(Duration::from_secs(0));

        thread::sleep(Duration::from_millis(10));

        assert!(!store.is_active(&token));
    }

    #[test]
    fn test_cleanup_expired() {
        let store = SessionStore::default();

        store.create_session_with_ttl(Duration::from_secs(0));
        store.create_session_with_ttl(Duration::from_secs(0));
        store.create_session(); // not expired

        thread::sleep(Duration::from_millis(10));

        assert_eq!(store.len(), 3);

        let removed = store.cleanup_expired();

        assert_eq!(removed, 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_session_token_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; portfolio_session=abc123; lang=en"),
        );

        assert_eq!(session_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_session_token_missing() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_token(&headers), None);

        headers.insert(header::COOKIE, HeaderValue::from_static("portfolio_session="));
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn test_is_authenticated() {
        let store = SessionStore::default();
        let token = store.create_session();

        let mut headers = HeaderMap::new();
        assert!(!is_authenticated(&store, &headers));

        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("{}={}", SESSION_COOKIE, token)).unwrap(),
        );
        assert!(is_authenticated(&store, &headers));

        store.destroy(&token);
        assert!(!is_authenticated(&store, &headers));
    }

    #[test]
    fn test_session_cookie_format() {
        let cookie = session_cookie("tok", DEFAULT_SESSION_TTL);
        assert_eq!(
            cookie,
            "portfolio_session=tok; Path=/; HttpOnly; SameSite=Lax; Max-Age=86400"
        );
        assert!(clear_session_cookie().ends_with("Max-Age=0"));
    }
}
