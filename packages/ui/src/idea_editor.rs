//! Create/edit form for a single idea, shown in a modal.

use api::IdeaQuery;
use dioxus::prelude::*;
use store::{Idea, IdeaDraft, IdeaPayload, Priority};

use crate::components::{Button, ButtonVariant, ErrorBanner, Input, Label, Textarea};
use crate::icons::FaWandMagicSparkles;
use crate::services::use_services;
use crate::views::ModalOverlay;
use crate::Icon;

#[derive(Clone, Debug, PartialEq)]
pub enum EditorMode {
    New,
    Edit(Idea),
}

impl EditorMode {
    fn heading(&self) -> &'static str {
        match self {
            EditorMode::New => "New idea",
            EditorMode::Edit(_) => "Edit idea",
        }
    }

    fn initial_draft(&self) -> IdeaDraft {
        match self {
            EditorMode::New => IdeaDraft::new(),
            EditorMode::Edit(idea) => IdeaDraft::from_idea(idea),
        }
    }

    fn idea_id(&self) -> Option<String> {
        match self {
            EditorMode::New => None,
            EditorMode::Edit(idea) => Some(idea.id.clone()),
        }
    }
}

/// `required` alone accepts a title made only of spaces.
fn validation_error(draft: &IdeaDraft) -> Option<&'static str> {
    draft
        .title
        .trim()
        .is_empty()
        .then_some("Title cannot be blank")
}

#[component]
pub fn IdeaEditor(
    mode: EditorMode,
    on_save: EventHandler<IdeaPayload>,
    on_cancel: EventHandler<()>,
) -> Element {
    let services = use_services();
    let initial = mode.initial_draft();
    let mut draft = use_signal(move || initial);
    let mut suggest_error = use_signal(|| Option::<String>::None);
    let mut suggesting = use_signal(|| false);
    let mut form_error = use_signal(|| Option::<&'static str>::None);
    let idea_id = mode.idea_id();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let invalid = validation_error(&draft.read());
        form_error.set(invalid);
        if invalid.is_none() {
            on_save.call(draft.read().to_payload());
        }
    };

    let suggest = {
        let idea_id = idea_id.clone();
        move |_: MouseEvent| {
            let Some(id) = idea_id.clone() else {
                return;
            };
            let board = services.board(IdeaQuery::default());
            suggesting.set(true);
            suggest_error.set(None);
            spawn(async move {
                match board.suggest_tags(&id).await {
                    Ok(suggestion) => {
                        tracing::debug!(
                            "Got {} tag suggestions ({:.0}% confidence)",
                            suggestion.suggestions.len(),
                            suggestion.confidence * 100.0
                        );
                        draft.write().add_suggested_tags(&suggestion.suggestions);
                    }
                    Err(e) => {
                        tracing::warn!("Tag suggestion failed: {e}");
                        suggest_error.set(Some(e.detail_or("Could not fetch suggestions")));
                    }
                }
                suggesting.set(false);
            });
        }
    };

    let current = draft();
    let priority_value = current.priority.as_str();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            form {
                class: "mv-editor",
                onsubmit: onsubmit,
                h2 { class: "mv-editor__heading", "{mode.heading()}" }

                if let Some(message) = form_error() {
                    ErrorBanner { message: message.to_string() }
                }
                if let Some(message) = suggest_error() {
                    ErrorBanner { message }
                }

                div {
                    class: "mv-field",
                    Label { html_for: "idea-title", "Title" }
                    Input {
                        id: "idea-title",
                        value: current.title.clone(),
                        placeholder: "What's the idea?",
                        required: true,
                        oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                    }
                }
                div {
                    class: "mv-field",
                    Label { html_for: "idea-content", "Content (markdown)" }
                    Textarea {
                        id: "idea-content",
                        value: current.content.clone(),
                        rows: 8,
                        oninput: move |evt: FormEvent| draft.write().content = evt.value(),
                    }
                }
                div {
                    class: "mv-field",
                    Label { html_for: "idea-tags", "Tags" }
                    div {
                        class: "mv-field__row",
                        Input {
                            id: "idea-tags",
                            value: current.tags_input.clone(),
                            placeholder: "comma, separated, tags",
                            oninput: move |evt: FormEvent| draft.write().tags_input = evt.value(),
                        }
                        if idea_id.is_some() {
                            Button {
                                variant: ButtonVariant::Outline,
                                title: "Suggest tags",
                                disabled: suggesting(),
                                onclick: suggest,
                                Icon { icon: FaWandMagicSparkles, width: 14, height: 14 }
                                if suggesting() { " Suggesting..." } else { " Suggest" }
                            }
                        }
                    }
                }
                div {
                    class: "mv-field__row",
                    div {
                        class: "mv-field",
                        Label { html_for: "idea-priority", "Priority" }
                        select {
                            id: "idea-priority",
                            class: "mv-input mv-select",
                            value: "{priority_value}",
                            onchange: move |evt: FormEvent| {
                                if let Ok(p) = evt.value().parse::<Priority>() {
                                    draft.write().priority = p;
                                }
                            },
                            for p in Priority::ALL {
                                option {
                                    key: "{p.as_str()}",
                                    value: "{p.as_str()}",
                                    selected: current.priority == p,
                                    "{p.label()}"
                                }
                            }
                        }
                    }
                    div {
                        class: "mv-field",
                        Label { html_for: "idea-category", "Category" }
                        Input {
                            id: "idea-category",
                            value: current.category.clone(),
                            placeholder: "optional",
                            oninput: move |evt: FormEvent| draft.write().category = evt.value(),
                        }
                    }
                }
                div {
                    class: "mv-editor__actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        r#type: "submit",
                        "Save"
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

    fn idea() -> Idea {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Idea {
            id: "i1".into(),
            user_id: None,
            title: "Solar kettle".into(),
            content: String::new(),
            tags: vec!["energy".into(), "kitchen".into()],
            priority: Priority::High,
            category: Some("home".into()),
            is_favorite: false,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_new_mode_starts_blank() {
        let mode = EditorMode::New;
        assert_eq!(mode.initial_draft(), IdeaDraft::new());
        assert_eq!(mode.idea_id(), None);
        assert_eq!(mode.heading(), "New idea");
    }

    #[test]
    fn test_blank_title_is_reported() {
        let mut draft = IdeaDraft::new();
        draft.title = "   ".into();
        assert_eq!(validation_error(&draft), Some("Title cannot be blank"));
        draft.title = "Solar kettle".into();
        assert_eq!(validation_error(&draft), None);
    }

    #[test]
    fn test_edit_mode_prefills() {
        let mode = EditorMode::Edit(idea());
        let draft = mode.initial_draft();
        assert_eq!(draft.tags_input, "energy, kitchen");
        assert_eq!(draft.category, "home");
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(mode.idea_id().as_deref(), Some("i1"));
    }
}
