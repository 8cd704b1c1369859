//! # Domain models for ideas, users and analytics
//!
//! Defines the records exchanged with the MindVault backend. Every type is
//! `Serialize + Deserialize` so it can be decoded straight from the REST
//! responses and re-encoded for request bodies or exports.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Idea`] | A single note: title, markdown-flavoured content, ordered tags, [`Priority`], optional category, favorite flag and timestamps. |
//! | [`User`] | The authenticated account as returned by `/api/auth/me` and the auth endpoints. |
//! | [`UserSummary`] | A row of the admin roster: a [`User`] plus its idea count. |
//! | [`AuthResponse`] | Token + user pair returned by login and register. |
//! | [`DashboardStats`] | Aggregate counts rendered by the analytics panel. |
//! | [`SmartSuggestion`] | Tag suggestions computed by the backend for an idea. |
//! | [`IdeaPayload`] / [`IdeaPatch`] | Create and partial-update request bodies. |
//!
//! Timestamps are naive UTC datetimes because that is what the backend emits
//! (no offset suffix).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Priority of an idea. Ordered `Low < Medium < High`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Human label used by selects and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `low`, `medium`, `high`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownPriority(pub String);

impl fmt::Display for UnknownPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown priority: {}", self.0)
    }
}

impl std::error::Error for UnknownPriority {}

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(UnknownPriority(s.to_string())),
        }
    }
}

/// A user-authored idea.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub id: String,
    /// Owning account. Ownership is enforced by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Idea {
    /// True when the idea was modified after creation.
    pub fn is_edited(&self) -> bool {
        self.updated_at > self.created_at
    }
}

/// The authenticated account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<NaiveDateTime>,
}

impl User {
    /// Username, falling back to the email address when blank.
    pub fn display_name(&self) -> &str {
        if self.username.trim().is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}

/// One row of the admin user roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub idea_count: u64,
}

/// Body returned by `POST /api/auth/login` and `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Per-priority idea counts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBreakdown {
    #[serde(default)]
    pub high: u64,
    #[serde(default)]
    pub medium: u64,
    #[serde(default)]
    pub low: u64,
}

impl PriorityBreakdown {
    pub fn get(&self, priority: Priority) -> u64 {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

/// Aggregates served by `GET /api/analytics/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_ideas: u64,
    /// Ideas created during the last seven days.
    pub recent_activity: u64,
    pub favorite_count: u64,
    #[serde(default)]
    pub priority_breakdown: PriorityBreakdown,
    /// Category name to count. Uncategorised ideas arrive under the key `"null"`.
    #[serde(default)]
    pub category_breakdown: BTreeMap<String, u64>,
}

/// Backend-computed tag suggestions for an idea.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmartSuggestion {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub confidence: f64,
}

/// Body of `POST /api/ideas`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdeaPayload {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub priority: Priority,
    pub category: Option<String>,
}

/// Body of `PUT /api/ideas/{id}`. `None` fields are left untouched by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IdeaPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl IdeaPatch {
    /// A patch that only flips the favorite flag.
    pub fn favorite(is_favorite: bool) -> Self {
        Self {
            is_favorite: Some(is_favorite),
            ..Self::default()
        }
    }
}

impl From<IdeaPayload> for IdeaPatch {
    fn from(payload: IdeaPayload) -> Self {
        Self {
            title: Some(payload.title),
            content: Some(payload.content),
            tags: Some(payload.tags),
            priority: Some(payload.priority),
            is_favorite: None,
            category: payload.category,
        }
    }
}

/// Body of `POST /api/ideas/combine`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombineRequest {
    pub idea1_id: String,
    pub idea2_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_title: Option<String>,
}
