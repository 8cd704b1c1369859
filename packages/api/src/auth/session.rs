//! # Session manager
//!
//! Owns the link between the bearer token in durable storage and the token
//! attached to backend requests.
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`restore`](SessionManager::restore) | Reads the stored token, attaches it and resolves `/auth/me`. A failure is treated as "no session": the token is cleared. |
//! | [`login`](SessionManager::login) / [`register`](SessionManager::register) | Credential exchange. On success the token is stored and attached; on failure an [`AuthFailure`] carries the backend's message or a generic fallback. |
//! | [`logout`](SessionManager::logout) | Clears the stored and attached token unconditionally. |

use store::{Storage, User, TOKEN_KEY};

use crate::Backend;

/// An authenticated user and the token that proves it.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Human-readable reason a login or registration was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct AuthFailure(pub String);

#[derive(Clone, Debug)]
pub struct SessionManager<B, S> {
    backend: B,
    storage: S,
}

impl<B: Backend, S: Storage> SessionManager<B, S> {
    pub fn new(backend: B, storage: S) -> Self {
        Self { backend, storage }
    }

    pub fn stored_token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// Resume the session saved in storage, if it is still valid.
    pub async fn restore(&self) -> Option<Session> {
        let token = self.stored_token()?;
        self.backend.set_token(Some(token.clone()));
        match self.backend.current_user().await {
            Ok(user) => {
                tracing::info!("Restored session for {}", user.display_name());
                Some(Session { token, user })
            }
            Err(e) => {
                // A login may have replaced the token while the check was in flight
                if self.stored_token().as_deref() == Some(token.as_str()) {
                    tracing::warn!("Stored session rejected, logging out: {e}");
                    self.logout();
                } else {
                    tracing::debug!("Stale session rejected after a newer sign-in: {e}");
                }
                None
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthFailure> {
        match self.backend.login(email, password).await {
            Ok(resp) => Ok(self.begin(resp.access_token, resp.user)),
            Err(e) => {
                tracing::warn!("Login failed: {e}");
                Err(AuthFailure(e.detail_or("Login failed")))
            }
        }
    }

    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<Session, AuthFailure> {
        match self.backend.register(email, username, password).await {
            Ok(resp) => Ok(self.begin(resp.access_token, resp.user)),
            Err(e) => {
                tracing::warn!("Registration failed: {e}");
                Err(AuthFailure(e.detail_or("Registration failed")))
            }
        }
    }

    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.backend.set_token(None);
    }

    fn begin(&self, token: String, user: User) -> Session {
        self.storage.set(TOKEN_KEY, &token);
        self.backend.set_token(Some(token.clone()));
        tracing::info!("Signed in as {}", user.display_name());
        Session { token, user }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{idea, user, Call, FakeBackend};
    use crate::{IdeaBoard, IdeaQuery};
    use store::MemoryStore;

    fn backend() -> FakeBackend {
        FakeBackend::new().with_account(user("u1", "ann@example.com", "ann"), "secret")
    }

    #[tokio::test]
    async fn test_restore_without_token_is_logged_out() {
        let backend = backend();
        let manager = SessionManager::new(backend.clone(), MemoryStore::new());
        assert!(manager.restore().await.is_none());
        // No token, no identity request
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_restore_with_valid_token() {
        let backend = backend();
        let storage = MemoryStore::new();
        storage.set(TOKEN_KEY, "token-u1");

        let manager = SessionManager::new(backend.clone(), storage.clone());
        let session = manager.restore().await.unwrap();
        assert_eq!(session.user.username, "ann");
        assert_eq!(session.token, "token-u1");
        assert_eq!(backend.token().as_deref(), Some("token-u1"));
        assert_eq!(backend.calls(), vec![Call::Me]);
    }

    #[tokio::test]
    async fn test_restore_with_invalid_token_clears_it() {
        let backend = backend();
        let storage = MemoryStore::new();
        storage.set(TOKEN_KEY, "expired");

        let manager = SessionManager::new(backend.clone(), storage.clone());
        assert!(manager.restore().await.is_none());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(backend.token().is_none());
    }

    #[tokio::test]
    async fn test_rejected_restore_keeps_newer_login() {
        let storage = MemoryStore::new();
        storage.set(TOKEN_KEY, "expired");
        let backend = backend();

        // Sign in while the identity check for the old token is pending
        let racing_storage = storage.clone();
        let racing_backend = backend.clone();
        let backend = backend.on_current_user(move || {
            racing_storage.set(TOKEN_KEY, "token-u1");
            racing_backend.set_token(Some("token-u1".into()));
        });

        let manager = SessionManager::new(backend.clone(), storage.clone());
        assert!(manager.restore().await.is_none());
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("token-u1"));
        assert_eq!(backend.token().as_deref(), Some("token-u1"));
    }

    #[tokio::test]
    async fn test_login_failure_reports_backend_detail() {
        let storage = MemoryStore::new();
        let manager = SessionManager::new(backend(), storage.clone());
        let err = manager.login("ann@example.com", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(storage.get(TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let manager = SessionManager::new(backend(), MemoryStore::new());
        let err = manager
            .register("ann@example.com", "ann2", "pw")
            .await
            .unwrap_err();
        assert_eq!(err, AuthFailure("Email already registered".into()));
    }

    #[tokio::test]
    async fn test_register_then_identity_resolves() {
        let backend = backend();
        let storage = MemoryStore::new();
        let manager = SessionManager::new(backend.clone(), storage.clone());
        let session = manager
            .register("bob@example.com", "bob", "hunter22")
            .await
            .unwrap();
        assert_eq!(storage.get(TOKEN_KEY), Some(session.token.clone()));

        // A fresh manager over the same storage resumes the session
        let resumed = SessionManager::new(backend, storage).restore().await.unwrap();
        assert_eq!(resumed.user.email, "bob@example.com");
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let backend = backend();
        let storage = MemoryStore::new();
        let manager = SessionManager::new(backend.clone(), storage.clone());
        manager.login("ann@example.com", "secret").await.unwrap();

        manager.logout();
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(backend.token().is_none());
        // Logging out twice is harmless
        manager.logout();
    }

    #[tokio::test]
    async fn test_login_then_dashboard_fetch() {
        let backend = backend().with_ideas(vec![idea("a", "A"), idea("b", "B"), idea("c", "C")]);
        let storage = MemoryStore::new();
        let manager = SessionManager::new(backend.clone(), storage.clone());

        let session = manager.login("ann@example.com", "secret").await.unwrap();
        assert_eq!(storage.get(TOKEN_KEY), Some(session.token));

        let board = IdeaBoard::new(backend.clone(), IdeaQuery::default());
        let ideas = board.fetch().await.unwrap();
        assert_eq!(ideas.len(), 3);
        assert_eq!(
            backend.calls(),
            vec![Call::Login("ann@example.com".into()), Call::List]
        );
    }
}
