//! Search, tag and priority inputs plus the view-mode switch.

use dioxus::prelude::*;
use store::{IdeaFilter, Priority, ViewMode};

use crate::components::Input;

/// An empty select value means "any priority".
fn parse_priority(value: &str) -> Option<Priority> {
    value.parse().ok()
}

#[component]
pub fn FilterBar(mut filter: Signal<IdeaFilter>, mut view_mode: Signal<ViewMode>) -> Element {
    let current = filter();
    let priority_value = current.priority.map(|p| p.as_str()).unwrap_or("");

    rsx! {
        div {
            class: "mv-filter-bar",
            Input {
                class: "mv-filter-bar__search",
                placeholder: "Search ideas...",
                value: current.search.clone(),
                oninput: move |evt: FormEvent| filter.write().search = evt.value(),
            }
            Input {
                class: "mv-filter-bar__tag",
                placeholder: "Filter by tag",
                value: current.tag.clone(),
                oninput: move |evt: FormEvent| filter.write().tag = evt.value(),
            }
            select {
                class: "mv-input mv-select",
                value: "{priority_value}",
                onchange: move |evt: FormEvent| {
                    filter.write().priority = parse_priority(&evt.value());
                },
                option { value: "", selected: current.priority.is_none(), "All priorities" }
                for p in Priority::ALL {
                    option {
                        key: "{p.as_str()}",
                        value: "{p.as_str()}",
                        selected: current.priority == Some(p),
                        "{p.label()}"
                    }
                }
            }
            div {
                class: "mv-segmented",
                for mode in ViewMode::ALL {
                    button {
                        key: "{mode.as_str()}",
                        class: if view_mode() == mode { "mv-segmented__item mv-segmented__item--active" } else { "mv-segmented__item" },
                        onclick: move |_| view_mode.set(mode),
                        "{mode.label()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("high"), Some(Priority::High));
        assert_eq!(parse_priority(""), None);
        assert_eq!(parse_priority("urgent"), None);
    }
}
