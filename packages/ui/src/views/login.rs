//! Email/password sign-in form.

use dioxus::prelude::*;

use crate::auth::{set_session, use_auth};
use crate::components::{Button, ErrorBanner, Input, Label};
use crate::services::use_services;

#[component]
pub fn LoginView(on_success: EventHandler<()>, on_navigate_register: EventHandler<()>) -> Element {
    let services = use_services();
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = services.session();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            match session.login(&email(), &password()).await {
                Ok(s) => {
                    set_session(&mut auth, s);
                    on_success.call(());
                }
                Err(failure) => error.set(Some(failure.to_string())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "mv-auth",
            form {
                class: "mv-auth__card",
                onsubmit: onsubmit,
                h1 { class: "mv-brand", "MindVault" }
                p { class: "mv-muted", "Sign in to your vault" }

                if let Some(message) = error() {
                    ErrorBanner { message }
                }

                div {
                    class: "mv-field",
                    Label { html_for: "login-email", "Email" }
                    Input {
                        id: "login-email",
                        r#type: "email",
                        value: email(),
                        required: true,
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    class: "mv-field",
                    Label { html_for: "login-password", "Password" }
                    Input {
                        id: "login-password",
                        r#type: "password",
                        value: password(),
                        required: true,
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                Button {
                    r#type: "submit",
                    class: "mv-auth__submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
                p {
                    class: "mv-auth__switch",
                    "No account yet? "
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate_register.call(());
                        },
                        "Register"
                    }
                }
            }
        }
    }
}
