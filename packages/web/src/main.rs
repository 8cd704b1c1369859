use dioxus::prelude::*;

use store::ClientConfig;
use views::{Dashboard, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The backend origin is baked in at build time for the browser
    use_context_provider(|| {
        let config = ClientConfig::from_env();
        tracing::info!("Starting MindVault web client");
        ui::Services::new(config, ui::make_storage())
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MINDVAULT_CSS }
        ui::ThemeProvider {
            ui::AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to the dashboard or the login page.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth().loading {
        if auth().is_authenticated() {
            nav.replace(Route::Dashboard {});
        } else {
            nav.replace(Route::Login {});
        }
    }

    rsx! {}
}
