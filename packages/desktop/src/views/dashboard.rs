use dioxus::prelude::*;
use ui::use_auth;
use ui::views::DashboardView;

use crate::Route;

/// Signed-in area. Bounces to the login page once the session is gone.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if auth().loading {
        return rsx! {
            div { class: "mv-empty", "Loading..." }
        };
    }

    if !auth().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        DashboardView {
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
