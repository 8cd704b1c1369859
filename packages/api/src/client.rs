//! # HTTP client for the MindVault REST backend
//!
//! [`ApiClient`] is the production [`Backend`]. Clones share one reqwest
//! connection pool and one bearer-token slot, so setting the token after a
//! login affects every clone held by the UI.
//!
//! ## Endpoints
//!
//! | Method | Path | Returns |
//! |--------|------|---------|
//! | POST | `/api/auth/login` | [`AuthResponse`] |
//! | POST | `/api/auth/register` | [`AuthResponse`] |
//! | GET | `/api/auth/me` | [`User`] |
//! | GET | `/api/ideas?tag&category&priority&view_mode` | `Vec<Idea>` |
//! | GET | `/api/ideas/{id}` | [`Idea`] |
//! | POST | `/api/ideas` | [`Idea`] |
//! | PUT | `/api/ideas/{id}` | [`Idea`] |
//! | DELETE | `/api/ideas/{id}` | nothing |
//! | POST | `/api/ideas/{id}/suggestions` | [`SmartSuggestion`] |
//! | POST | `/api/ideas/combine` | [`Idea`] |
//! | GET | `/api/analytics/dashboard` | [`DashboardStats`] |
//! | GET | `/api/admin/users` | `Vec<UserSummary>` |
//! | GET | `/api/admin/export/{id}` | arbitrary JSON |
//!
//! Every request carries `Authorization: Bearer <token>` once a token is set.

use std::sync::{Arc, RwLock};

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use store::{
    AuthResponse, ClientConfig, CombineRequest, DashboardStats, Idea, IdeaPatch, IdeaPayload,
    SmartSuggestion, User, UserSummary,
};

use crate::{ApiError, Backend, IdeaQuery};

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    email: &'a str,
    username: &'a str,
    password: &'a str,
}

/// reqwest-backed client. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    origin: Arc<str>,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Client for the given backend origin (e.g. `http://localhost:8001`).
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = store::config::normalize_origin(&origin.into());
        Self {
            http: reqwest::Client::new(),
            origin: origin.into(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api.origin.clone())
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The bearer token currently attached to requests.
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.origin, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send_raw(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::debug!("backend answered {status}: {body}");
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        Ok(body)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send_raw(builder).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Backend for ApiClient {
    fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let req = self
            .request(Method::POST, "/auth/login")
            .json(&LoginBody { email, password });
        self.send(req).await
    }

    async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let req = self.request(Method::POST, "/auth/register").json(&RegisterBody {
            email,
            username,
            password,
        });
        self.send(req).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.send(self.request(Method::GET, "/auth/me")).await
    }

    async fn list_ideas(&self, query: &IdeaQuery) -> Result<Vec<Idea>, ApiError> {
        let req = self.request(Method::GET, "/ideas").query(&query.to_pairs());
        self.send(req).await
    }

    async fn get_idea(&self, id: &str) -> Result<Idea, ApiError> {
        self.send(self.request(Method::GET, &format!("/ideas/{id}")))
            .await
    }

    async fn create_idea(&self, payload: &IdeaPayload) -> Result<Idea, ApiError> {
        self.send(self.request(Method::POST, "/ideas").json(payload))
            .await
    }

    async fn update_idea(&self, id: &str, patch: &IdeaPatch) -> Result<Idea, ApiError> {
        self.send(self.request(Method::PUT, &format!("/ideas/{id}")).json(patch))
            .await
    }

    async fn delete_idea(&self, id: &str) -> Result<(), ApiError> {
        self.send_raw(self.request(Method::DELETE, &format!("/ideas/{id}")))
            .await
            .map(|_| ())
    }

    async fn suggest_tags(&self, id: &str) -> Result<SmartSuggestion, ApiError> {
        self.send(self.request(Method::POST, &format!("/ideas/{id}/suggestions")))
            .await
    }

    async fn combine_ideas(&self, request: &CombineRequest) -> Result<Idea, ApiError> {
        self.send(self.request(Method::POST, "/ideas/combine").json(request))
            .await
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.send(self.request(Method::GET, "/analytics/dashboard"))
            .await
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.send(self.request(Method::GET, "/admin/users")).await
    }

    async fn export_user(&self, user_id: &str) -> Result<Value, ApiError> {
        self.send(self.request(Method::GET, &format!("/admin/export/{user_id}")))
            .await
    }
}
