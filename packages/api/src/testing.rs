//! In-memory [`Backend`] that records every call, for unit tests.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde_json::{json, Value};
use store::{
    AuthResponse, CombineRequest, DashboardStats, Idea, IdeaPatch, IdeaPayload, Priority,
    SmartSuggestion, User, UserSummary,
};

use crate::{ApiError, Backend, IdeaQuery};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Login(String),
    Register(String),
    Me,
    List,
    Get(String),
    Create(String),
    Update(String),
    Delete(String),
    Suggest(String),
    Combine(String, String),
    Stats,
    Users,
    Export(String),
}

type Hook = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct State {
    token: Option<String>,
    calls: Vec<Call>,
    accounts: Vec<(User, String)>,
    ideas: Vec<Idea>,
    next_id: u32,
    /// Runs once, after `/auth/me` has been answered.
    on_current_user: Option<Hook>,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<State>>,
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        detail: Some("Idea not found".into()),
    }
}

fn unauthorized() -> ApiError {
    ApiError::Status {
        status: 401,
        detail: Some("Invalid authentication credentials".into()),
    }
}

pub fn user(id: &str, email: &str, username: &str) -> User {
    User {
        id: id.into(),
        email: email.into(),
        username: username.into(),
        is_admin: false,
        created_at: None,
        last_active: None,
    }
}

pub fn idea(id: &str, title: &str) -> Idea {
    let ts = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    Idea {
        id: id.into(),
        user_id: None,
        title: title.into(),
        content: String::new(),
        tags: Vec::new(),
        priority: Priority::Medium,
        category: None,
        is_favorite: false,
        created_at: ts,
        updated_at: ts,
    }
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, user: User, password: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .accounts
            .push((user, password.to_string()));
        self
    }

    pub fn with_ideas(self, ideas: Vec<Idea>) -> Self {
        self.state.lock().unwrap().ideas = ideas;
        self
    }

    pub fn on_current_user(self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.state.lock().unwrap().on_current_user = Some(Box::new(hook));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn token(&self) -> Option<String> {
        self.state.lock().unwrap().token.clone()
    }

    pub fn idea_count(&self) -> usize {
        self.state.lock().unwrap().ideas.len()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }

    fn authed_user(&self) -> Result<User, ApiError> {
        let state = self.state.lock().unwrap();
        let token = state.token.as_deref().ok_or_else(unauthorized)?;
        state
            .accounts
            .iter()
            .find(|(u, _)| token == format!("token-{}", u.id))
            .map(|(u, _)| u.clone())
            .ok_or_else(unauthorized)
    }
}

impl Backend for FakeBackend {
    fn set_token(&self, token: Option<String>) {
        self.state.lock().unwrap().token = token;
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.record(Call::Login(email.into()));
        let state = self.state.lock().unwrap();
        state
            .accounts
            .iter()
            .find(|(u, p)| u.email == email && p == password)
            .map(|(u, _)| AuthResponse {
                access_token: format!("token-{}", u.id),
                token_type: "bearer".into(),
                user: u.clone(),
            })
            .ok_or(ApiError::Status {
                status: 401,
                detail: Some("Invalid email or password".into()),
            })
    }

    async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.record(Call::Register(email.into()));
        let mut state = self.state.lock().unwrap();
        if state.accounts.iter().any(|(u, _)| u.email == email) {
            return Err(ApiError::Status {
                status: 400,
                detail: Some("Email already registered".into()),
            });
        }
        let id = format!("u{}", state.accounts.len() + 1);
        let new_user = user(&id, email, username);
        state.accounts.push((new_user.clone(), password.into()));
        Ok(AuthResponse {
            access_token: format!("token-{id}"),
            token_type: "bearer".into(),
            user: new_user,
        })
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.record(Call::Me);
        let result = self.authed_user();
        let hook = self.state.lock().unwrap().on_current_user.take();
        if let Some(hook) = hook {
            hook();
        }
        result
    }

    async fn list_ideas(&self, _query: &IdeaQuery) -> Result<Vec<Idea>, ApiError> {
        self.record(Call::List);
        self.authed_user()?;
        Ok(self.state.lock().unwrap().ideas.clone())
    }

    async fn get_idea(&self, id: &str) -> Result<Idea, ApiError> {
        self.record(Call::Get(id.into()));
        let state = self.state.lock().unwrap();
        state.ideas.iter().find(|i| i.id == id).cloned().ok_or_else(not_found)
    }

    async fn create_idea(&self, payload: &IdeaPayload) -> Result<Idea, ApiError> {
        self.record(Call::Create(payload.title.clone()));
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let mut created = idea(&format!("new{}", state.next_id), &payload.title);
        created.content = payload.content.clone();
        created.tags = payload.tags.clone();
        created.priority = payload.priority;
        created.category = payload.category.clone();
        state.ideas.insert(0, created.clone());
        Ok(created)
    }

    async fn update_idea(&self, id: &str, patch: &IdeaPatch) -> Result<Idea, ApiError> {
        self.record(Call::Update(id.into()));
        let mut state = self.state.lock().unwrap();
        let target = state
            .ideas
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(not_found)?;
        if let Some(title) = &patch.title {
            target.title = title.clone();
        }
        if let Some(content) = &patch.content {
            target.content = content.clone();
        }
        if let Some(tags) = &patch.tags {
            target.tags = tags.clone();
        }
        if let Some(priority) = patch.priority {
            target.priority = priority;
        }
        if let Some(fav) = patch.is_favorite {
            target.is_favorite = fav;
        }
        if let Some(category) = &patch.category {
            target.category = Some(category.clone());
        }
        Ok(target.clone())
    }

    async fn delete_idea(&self, id: &str) -> Result<(), ApiError> {
        self.record(Call::Delete(id.into()));
        let mut state = self.state.lock().unwrap();
        let before = state.ideas.len();
        state.ideas.retain(|i| i.id != id);
        if state.ideas.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn suggest_tags(&self, id: &str) -> Result<SmartSuggestion, ApiError> {
        self.record(Call::Suggest(id.into()));
        Ok(SmartSuggestion {
            kind: "tag".into(),
            suggestions: vec!["water".into(), "solar".into()],
            confidence: 0.7,
        })
    }

    async fn combine_ideas(&self, request: &CombineRequest) -> Result<Idea, ApiError> {
        self.record(Call::Combine(
            request.idea1_id.clone(),
            request.idea2_id.clone(),
        ));
        let mut state = self.state.lock().unwrap();
        let a = state
            .ideas
            .iter()
            .find(|i| i.id == request.idea1_id)
            .cloned()
            .ok_or_else(not_found)?;
        let b = state
            .ideas
            .iter()
            .find(|i| i.id == request.idea2_id)
            .cloned()
            .ok_or_else(not_found)?;
        let title = request
            .new_title
            .clone()
            .unwrap_or_else(|| format!("{} + {}", a.title, b.title));
        state.next_id += 1;
        let mut fused = idea(&format!("new{}", state.next_id), &title);
        fused.category = Some("fusion".into());
        fused.priority = a.priority.max(b.priority);
        state.ideas.insert(0, fused.clone());
        Ok(fused)
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.record(Call::Stats);
        let state = self.state.lock().unwrap();
        Ok(DashboardStats {
            total_ideas: state.ideas.len() as u64,
            ..DashboardStats::default()
        })
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.record(Call::Users);
        let state = self.state.lock().unwrap();
        Ok(state
            .accounts
            .iter()
            .map(|(u, _)| UserSummary {
                user: u.clone(),
                idea_count: 0,
            })
            .collect())
    }

    async fn export_user(&self, user_id: &str) -> Result<Value, ApiError> {
        self.record(Call::Export(user_id.into()));
        Ok(json!({ "user": { "id": user_id }, "ideas": [], "total_ideas": 0 }))
    }
}
