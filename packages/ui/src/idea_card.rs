use chrono::NaiveDateTime;
use dioxus::prelude::*;
use store::Idea;

use crate::icons::{FaPenToSquare, FaStar, FaTrashCan};
use crate::markdown::render_markdown;
use crate::Icon;

fn format_date(ts: &NaiveDateTime) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// One idea in the list: rendered markdown body, tags, priority and actions.
///
/// Every callback receives the idea id.
#[component]
pub fn IdeaCard(
    idea: Idea,
    #[props(default)] selected: bool,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
    on_toggle_favorite: EventHandler<String>,
    on_toggle_select: EventHandler<String>,
) -> Element {
    let body = render_markdown(&idea.content);
    let created = format_date(&idea.created_at);
    let updated = idea.is_edited().then(|| format_date(&idea.updated_at));
    let priority = idea.priority;

    let id_fav = idea.id.clone();
    let id_edit = idea.id.clone();
    let id_delete = idea.id.clone();
    let id_select = idea.id.clone();

    rsx! {
        article {
            class: if selected { "mv-card mv-card--selected" } else { "mv-card" },
            header {
                class: "mv-card__header",
                input {
                    r#type: "checkbox",
                    class: "mv-card__select",
                    title: "Select for combining",
                    checked: selected,
                    onchange: move |_| on_toggle_select.call(id_select.clone()),
                }
                h3 { class: "mv-card__title", "{idea.title}" }
                button {
                    class: if idea.is_favorite { "mv-icon-button mv-favorite mv-favorite--on" } else { "mv-icon-button mv-favorite" },
                    title: if idea.is_favorite { "Remove from favorites" } else { "Add to favorites" },
                    onclick: move |_| on_toggle_favorite.call(id_fav.clone()),
                    Icon { icon: FaStar, width: 14, height: 14 }
                }
                button {
                    class: "mv-icon-button",
                    title: "Edit",
                    onclick: move |_| on_edit.call(id_edit.clone()),
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                }
                button {
                    class: "mv-icon-button mv-icon-button--danger",
                    title: "Delete",
                    onclick: move |_| on_delete.call(id_delete.clone()),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
            }
            div {
                class: "mv-card__body mv-markdown",
                dangerous_inner_html: "{body}",
            }
            footer {
                class: "mv-card__footer",
                span { class: "mv-badge priority-{priority.as_str()}", "{priority.label()}" }
                if let Some(category) = &idea.category {
                    span { class: "mv-category", "{category}" }
                }
                // Tags may repeat, so chips are keyed by position
                for (i, tag) in idea.tags.iter().enumerate() {
                    span { key: "{i}", class: "mv-chip", "#{tag}" }
                }
                span {
                    class: "mv-card__dates",
                    "Created {created}"
                    if let Some(updated) = updated {
                        " · Updated {updated}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dioxus_core::{NoOpMutations, VirtualDom};
    use store::{parse_tags, Priority};

    fn idea_with_tags(tags: &str) -> Idea {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Idea {
            id: "i1".into(),
            user_id: None,
            title: "Repeated tags".into(),
            content: "body".into(),
            tags: parse_tags(tags),
            priority: Priority::Low,
            category: None,
            is_favorite: false,
            created_at: ts,
            updated_at: ts,
        }
    }

    /// Renders a card, then toggles its selection from a task.
    #[component]
    fn SelectToggleHarness() -> Element {
        let mut selected = use_signal(|| false);
        use_hook(|| {
            spawn(async move {
                selected.set(true);
            })
        });

        rsx! {
            IdeaCard {
                idea: idea_with_tags("a, a, b"),
                selected: selected(),
                on_edit: move |_| {},
                on_delete: move |_| {},
                on_toggle_favorite: move |_| {},
                on_toggle_select: move |_| {},
            }
        }
    }

    #[tokio::test]
    async fn test_rerender_with_repeated_tags() {
        let mut dom = VirtualDom::new(SelectToggleHarness);
        dom.rebuild_in_place();
        dom.wait_for_work().await;
        dom.render_immediate(&mut NoOpMutations);
    }

    #[test]
    fn test_format_date() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(format_date(&ts), "Mar 7, 2025");
    }
}
