use dioxus::prelude::*;

use crate::auth::{set_session, use_auth};
use crate::components::{Button, ErrorBanner, Input, Label};
use crate::services::use_services;

/// Account creation form. Signs the new user in on success.
#[component]
pub fn RegisterView(on_success: EventHandler<()>, on_navigate_login: EventHandler<()>) -> Element {
    let services = use_services();
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = services.session();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            match session.register(&email(), &username(), &password()).await {
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
                p { class: "mv-muted", "Create your account" }

                if let Some(message) = error() {
                    ErrorBanner { message }
                }

                div {
                    class: "mv-field",
                    Label { html_for: "register-email", "Email" }
                    Input {
                        id: "register-email",
                        r#type: "email",
                        value: email(),
                        required: true,
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    class: "mv-field",
                    Label { html_for: "register-username", "Username" }
                    Input {
                        id: "register-username",
                        value: username(),
                        required: true,
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }
                div {
                    class: "mv-field",
                    Label { html_for: "register-password", "Password" }
                    Input {
                        id: "register-password",
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
                    if submitting() { "Creating account..." } else { "Create account" }
                }
                p {
                    class: "mv-auth__switch",
                    "Already registered? "
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate_login.call(());
                        },
                        "Sign in"
                    }
                }
            }
        }
    }
}
