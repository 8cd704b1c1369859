//! Authentication context and hooks for the UI.

use api::Session;
use dioxus::prelude::*;
use store::User;

use crate::services::{use_services, Services};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True until the stored session has been checked.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self {
            loading: false,
            ..Self::default()
        }
    }

    pub fn from_session(session: Option<Session>) -> Self {
        match session {
            Some(Session { token, user }) => Self {
                user: Some(user),
                token: Some(token),
                loading: false,
            },
            None => Self::signed_out(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    /// State after the startup restore resolves, or `None` when a sign-in
    /// completed first and must not be overwritten.
    fn after_restore(&self, restored: Option<Session>) -> Option<Self> {
        if self.is_authenticated() {
            return None;
        }
        Some(Self::from_session(restored))
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Record a freshly established session.
pub fn set_session(auth: &mut Signal<AuthState>, session: Session) {
    auth.set(AuthState::from_session(Some(session)));
}

/// Drop the session locally. There is no server-side logout.
pub fn sign_out(auth: &mut Signal<AuthState>, services: &Services) {
    services.session().logout();
    auth.set(AuthState::signed_out());
}

/// Provider component that manages authentication state.
/// Wrap your app with this component (inside the [`Services`] context).
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let services = use_services();
    let mut auth_state = use_signal(AuthState::default);

    // Resume the stored session once on mount
    let _ = use_resource(move || {
        let session = services.session();
        async move {
            let restored = session.restore().await;
            let next = auth_state.peek().after_restore(restored);
            if let Some(next) = next {
                auth_state.set(next);
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] on_logout: EventHandler<()>,
) -> Element {
    let mut auth_state = use_auth();
    let services = use_services();

    let onclick = move |_| {
        sign_out(&mut auth_state, &services);
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> User {
        User {
            id: "u1".into(),
            email: "ann@example.com".into(),
            username: "ann".into(),
            is_admin,
            created_at: None,
            last_active: None,
        }
    }

    #[test]
    fn test_default_state_is_loading() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_from_session() {
        let state = AuthState::from_session(Some(Session {
            token: "t".into(),
            user: user(true),
        }));
        assert!(!state.loading);
        assert!(state.is_authenticated());
        assert!(state.is_admin());
        assert_eq!(state.token.as_deref(), Some("t"));

        let state = AuthState::from_session(None);
        assert_eq!(state, AuthState::signed_out());
        assert!(!state.is_admin());
    }

    #[test]
    fn test_restore_does_not_override_newer_sign_in() {
        let loading = AuthState::default();
        assert_eq!(loading.after_restore(None), Some(AuthState::signed_out()));

        let signed_in = AuthState::from_session(Some(Session {
            token: "fresh".into(),
            user: user(false),
        }));
        assert_eq!(signed_in.after_restore(None), None);
    }
}
