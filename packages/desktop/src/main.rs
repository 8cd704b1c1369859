use std::path::{Path, PathBuf};

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
    // MINDVAULT_BACKEND_URL may come from a local .env
    dotenvy::dotenv().ok();
    dioxus::launch(App);
}

/// `<config_dir>/mindvault/mindvault.toml`
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mindvault").join(ClientConfig::filename()))
}

/// Read the config file. A missing or malformed file yields the defaults.
fn read_config(path: &Path) -> ClientConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => {
            tracing::debug!("No config at {}, using defaults", path.display());
            return ClientConfig::default();
        }
    };
    match ClientConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid config {}: {e}", path.display());
            ClientConfig::default()
        }
    }
}

fn load_config() -> ClientConfig {
    config_path()
        .map(|path| read_config(&path))
        .unwrap_or_default()
        .with_env_override()
}

#[component]
fn App() -> Element {
    use_context_provider(|| ui::Services::new(load_config(), ui::make_storage()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MINDVAULT_CSS }
        ui::ThemeProvider {
            ui::AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    // Redirect based on auth state
    if !auth().loading {
        if auth().is_authenticated() {
            nav.replace(Route::Dashboard {});
        } else {
            nav.replace(Route::Login {});
        }
    }

    rsx! {}
}
