//! Dark/light theme: a boolean in context, persisted under `theme`.

use dioxus::prelude::*;
use store::{SharedStorage, Storage, THEME_KEY};

use crate::icons::{FaMoon, FaSun};
use crate::services::use_services;
use crate::Icon;

/// `true` when the dark theme is active.
pub type ThemeSignal = Signal<bool>;

fn theme_value(dark: bool) -> &'static str {
    if dark {
        "dark"
    } else {
        "light"
    }
}

/// Read the persisted choice into `theme` and apply it to the document.
pub fn load_theme_from_storage(theme: &mut ThemeSignal, storage: &SharedStorage) {
    let dark = storage.get(THEME_KEY).as_deref() == Some("dark");
    theme.set(dark);
    apply_theme(dark);
}

/// Toggle the `dark` class on the document element.
pub fn apply_theme(dark: bool) {
    document::eval(&format!(
        "document.documentElement.classList.toggle('dark', {dark});"
    ));
}

/// Provides the [`ThemeSignal`] and restores the saved theme on mount.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let services = use_services();
    let mut theme: ThemeSignal = use_context_provider(|| Signal::new(false));

    use_effect(move || {
        load_theme_from_storage(&mut theme, &services.storage);
    });

    rsx! {
        {children}
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeSignal>();
    let services = use_services();

    let onclick = move |_| {
        let dark = !theme();
        theme.set(dark);
        services.storage.set(THEME_KEY, theme_value(dark));
        apply_theme(dark);
    };

    rsx! {
        button {
            class: "mv-icon-button",
            title: if theme() { "Switch to light theme" } else { "Switch to dark theme" },
            onclick: onclick,
            if theme() {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_value() {
        assert_eq!(theme_value(true), "dark");
        assert_eq!(theme_value(false), "light");
    }
}
