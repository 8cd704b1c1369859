//! # API crate — client side of the MindVault REST backend
//!
//! This crate owns everything that talks to the network. The frontends never
//! issue requests themselves; they hold the service objects defined here.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`], the reqwest implementation of [`Backend`] |
//! | [`error`] | [`ApiError`] and extraction of the backend's `detail` message |
//! | [`auth`] | [`SessionManager`]: login, register, logout and session restore, with the token persisted in [`store::Storage`] |
//! | [`board`] | [`IdeaBoard`]: idea CRUD where every mutation is followed by a full list refetch |
//!
//! ## The [`Backend`] seam
//!
//! Session and board logic are generic over [`Backend`] so they can run against
//! an in-memory fake in tests. The trait mirrors the REST surface one method per
//! endpoint; token handling is part of the trait because the session manager
//! decides when a token becomes active.

use std::future::Future;

use serde_json::Value;

pub mod auth;
pub mod board;
pub mod client;
pub mod error;

#[cfg(test)]
mod testing;

pub use auth::{AuthFailure, Session, SessionManager};
pub use board::IdeaBoard;
pub use client::ApiClient;
pub use error::ApiError;

pub use store::{
    AuthResponse, CombineRequest, DashboardStats, Idea, IdeaPatch, IdeaPayload, Priority,
    SmartSuggestion, User, UserSummary, ViewMode,
};

/// One method per backend endpoint.
pub trait Backend {
    /// Attach (or clear) the bearer token used by all later requests.
    fn set_token(&self, token: Option<String>);

    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn current_user(&self) -> impl Future<Output = Result<User, ApiError>>;

    fn list_ideas(&self, query: &IdeaQuery) -> impl Future<Output = Result<Vec<Idea>, ApiError>>;
    fn get_idea(&self, id: &str) -> impl Future<Output = Result<Idea, ApiError>>;
    fn create_idea(&self, payload: &IdeaPayload) -> impl Future<Output = Result<Idea, ApiError>>;
    fn update_idea(
        &self,
        id: &str,
        patch: &IdeaPatch,
    ) -> impl Future<Output = Result<Idea, ApiError>>;
    fn delete_idea(&self, id: &str) -> impl Future<Output = Result<(), ApiError>>;
    fn suggest_tags(&self, id: &str) -> impl Future<Output = Result<SmartSuggestion, ApiError>>;
    fn combine_ideas(
        &self,
        request: &CombineRequest,
    ) -> impl Future<Output = Result<Idea, ApiError>>;

    fn dashboard_stats(&self) -> impl Future<Output = Result<DashboardStats, ApiError>>;
    fn list_users(&self) -> impl Future<Output = Result<Vec<UserSummary>, ApiError>>;
    fn export_user(&self, user_id: &str) -> impl Future<Output = Result<Value, ApiError>>;
}

/// Server-side list parameters for `GET /api/ideas`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdeaQuery {
    pub tag: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub view_mode: ViewMode,
}

impl IdeaQuery {
    pub fn with_view_mode(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Self::default()
        }
    }

    /// Query-string pairs. `view_mode` is always sent; filters only when set.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority", priority.as_str().to_string()));
        }
        pairs.push(("view_mode", self.view_mode.as_str().to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{idea, user, Call, FakeBackend};

    #[test]
    fn test_default_query_only_sends_view_mode() {
        assert_eq!(
            IdeaQuery::default().to_pairs(),
            vec![("view_mode", "timeline".to_string())]
        );
    }

    #[test]
    fn test_query_pairs_with_filters() {
        let query = IdeaQuery {
            tag: Some("energy".into()),
            category: None,
            priority: Some(Priority::High),
            view_mode: ViewMode::Grid,
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("tag", "energy".to_string()),
                ("priority", "high".to_string()),
                ("view_mode", "grid".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_analytics_and_admin_endpoints() {
        let backend = FakeBackend::new()
            .with_account(user("u1", "ann@example.com", "ann"), "secret")
            .with_ideas(vec![idea("a", "A"), idea("b", "B")]);

        let stats = backend.dashboard_stats().await.unwrap();
        assert_eq!(stats.total_ideas, 2);

        let users = backend.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user.username, "ann");

        let export = backend.export_user("u1").await.unwrap();
        assert_eq!(export["user"]["id"], "u1");

        assert_eq!(
            backend.calls(),
            vec![Call::Stats, Call::Users, Call::Export("u1".into())]
        );
    }
}
