//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod services;
pub use services::{make_storage, use_services, Services};

pub mod platform;

pub mod markdown;

pub mod views;

pub const MINDVAULT_CSS: Asset = asset!("/assets/mindvault.css");

mod auth;
pub use auth::{set_session, sign_out, use_auth, AuthProvider, AuthState, LogoutButton};

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, ThemeProvider, ThemeSignal, ThemeToggle};

mod nav_tabs;
pub use nav_tabs::{DashboardTab, NavTabs};

mod filter_bar;
pub use filter_bar::FilterBar;

mod idea_card;
pub use idea_card::IdeaCard;

mod idea_editor;
pub use idea_editor::{EditorMode, IdeaEditor};

mod analytics_panel;
pub use analytics_panel::AnalyticsPanel;

mod admin_panel;
pub use admin_panel::AdminPanel;
