use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::nav_tabs::{DashboardTab, NavTabs};
use crate::theme::ThemeToggle;
use crate::{AdminPanel, AnalyticsPanel};

use super::IdeasView;

/// Signed-in shell: header, tab strip and the active tab's body.
#[component]
pub fn DashboardView(on_logout: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut tab = use_signal(DashboardTab::default);

    let state = auth();
    let is_admin = state.is_admin();
    let name = state
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();
    // A stale Admin selection falls back once admin rights are gone
    let active = match tab() {
        DashboardTab::Admin if !is_admin => DashboardTab::Ideas,
        other => other,
    };

    rsx! {
        div {
            class: "mv-app",
            header {
                class: "mv-header",
                h1 { class: "mv-brand", "MindVault" }
                div {
                    class: "mv-header__actions",
                    span { class: "mv-header__user", "{name}" }
                    ThemeToggle {}
                    LogoutButton {
                        class: "mv-button mv-button--ghost",
                        on_logout: move |_| on_logout.call(()),
                    }
                }
            }
            NavTabs {
                active,
                is_admin,
                on_select: move |t: DashboardTab| tab.set(t),
            }
            main {
                class: "mv-main",
                {match active {
                    DashboardTab::Ideas => rsx! { IdeasView {} },
                    DashboardTab::Analytics => rsx! { AnalyticsPanel {} },
                    DashboardTab::Admin => rsx! { AdminPanel {} },
                }}
            }
        }
    }
}
